//! Picker state: the current color, the model the user is viewing, and the
//! observers that redraw when either changes.
//!
//! A [`PickerState`] is created by the application's composition root and
//! handed to whichever component needs it; there is no global instance. Edits
//! arrive as [`FieldChange`] values and are dispatched with an exhaustive
//! `match`.

use tracing::debug;

use crate::hex::Hex;
use crate::model::{AnyColor, ColorModel};
use crate::rgb::Rgb;
use crate::space::ColorSpace;

/// One edited component, carrying its new value in that model's native scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldChange {
    Red(f64),
    Green(f64),
    Blue(f64),
    Hex(Hex),
    HslHue(f64),
    HslSaturation(f64),
    HslLuminance(f64),
    HsvHue(f64),
    HsvSaturation(f64),
    HsvValue(f64),
    Cyan(f64),
    Magenta(f64),
    Yellow(f64),
    Key(f64),
    X(f64),
    Y(f64),
    Z(f64),
    LabL(f64),
    LabA(f64),
    LabB(f64),
}

impl FieldChange {
    /// The model whose component this change edits.
    pub fn model(&self) -> ColorModel {
        match self {
            FieldChange::Red(_) | FieldChange::Green(_) | FieldChange::Blue(_) => ColorModel::Rgb,
            FieldChange::Hex(_) => ColorModel::Hex,
            FieldChange::HslHue(_) | FieldChange::HslSaturation(_) | FieldChange::HslLuminance(_) => {
                ColorModel::Hsl
            }
            FieldChange::HsvHue(_) | FieldChange::HsvSaturation(_) | FieldChange::HsvValue(_) => {
                ColorModel::Hsv
            }
            FieldChange::Cyan(_)
            | FieldChange::Magenta(_)
            | FieldChange::Yellow(_)
            | FieldChange::Key(_) => ColorModel::Cmyk,
            FieldChange::X(_) | FieldChange::Y(_) | FieldChange::Z(_) => ColorModel::Xyz,
            FieldChange::LabL(_) | FieldChange::LabA(_) | FieldChange::LabB(_) => ColorModel::Lab,
        }
    }

    /// Applies this change to `color`, returning a value in the edited model.
    ///
    /// If `color` is already in that model its own components are edited, so
    /// e.g. the hue of a fully desaturated HSL color survives a saturation
    /// round trip instead of collapsing to 0 through RGB.
    pub fn apply_to(&self, color: AnyColor) -> AnyColor {
        match *self {
            FieldChange::Red(v) => AnyColor::Rgb(color.to_rgb().with_red(v)),
            FieldChange::Green(v) => AnyColor::Rgb(color.to_rgb().with_green(v)),
            FieldChange::Blue(v) => AnyColor::Rgb(color.to_rgb().with_blue(v)),
            FieldChange::Hex(h) => AnyColor::Hex(h),
            FieldChange::HslHue(v) => AnyColor::Hsl(color.to_hsl().with_hue(v)),
            FieldChange::HslSaturation(v) => AnyColor::Hsl(color.to_hsl().with_saturation(v)),
            FieldChange::HslLuminance(v) => AnyColor::Hsl(color.to_hsl().with_luminance(v)),
            FieldChange::HsvHue(v) => AnyColor::Hsv(color.to_hsv().with_hue(v)),
            FieldChange::HsvSaturation(v) => AnyColor::Hsv(color.to_hsv().with_saturation(v)),
            FieldChange::HsvValue(v) => AnyColor::Hsv(color.to_hsv().with_value(v)),
            FieldChange::Cyan(v) => AnyColor::Cmyk(color.to_cmyk().with_cyan(v)),
            FieldChange::Magenta(v) => AnyColor::Cmyk(color.to_cmyk().with_magenta(v)),
            FieldChange::Yellow(v) => AnyColor::Cmyk(color.to_cmyk().with_yellow(v)),
            FieldChange::Key(v) => AnyColor::Cmyk(color.to_cmyk().with_key(v)),
            FieldChange::X(v) => AnyColor::Xyz(color.to_xyz().with_x(v)),
            FieldChange::Y(v) => AnyColor::Xyz(color.to_xyz().with_y(v)),
            FieldChange::Z(v) => AnyColor::Xyz(color.to_xyz().with_z(v)),
            FieldChange::LabL(v) => AnyColor::Lab(color.to_lab().with_l(v)),
            FieldChange::LabA(v) => AnyColor::Lab(color.to_lab().with_a(v)),
            FieldChange::LabB(v) => AnyColor::Lab(color.to_lab().with_b(v)),
        }
    }
}

/// What observers are told after the state changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorEvent {
    /// The current color, in the model it was last edited in.
    pub color: AnyColor,
    pub active_model: ColorModel,
    /// The edit that caused this event, if it came from a field.
    pub change: Option<FieldChange>,
}

/// Receives a [`ColorEvent`] after every effective change.
pub trait ColorObserver {
    fn on_color_changed(&mut self, event: &ColorEvent);
}

impl<F: FnMut(&ColorEvent)> ColorObserver for F {
    fn on_color_changed(&mut self, event: &ColorEvent) {
        self(event)
    }
}

/// Handle returned by [`PickerState::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// The picker's current color and active model.
pub struct PickerState {
    color: AnyColor,
    active_model: ColorModel,
    observers: Vec<(SubscriptionId, Box<dyn ColorObserver>)>,
    next_id: u64,
}

impl PickerState {
    pub fn new(color: AnyColor, active_model: ColorModel) -> Self {
        Self {
            color,
            active_model,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// The current color as last set or edited.
    pub fn color(&self) -> AnyColor {
        self.color
    }

    pub fn rgb(&self) -> Rgb {
        self.color.to_rgb()
    }

    pub fn active_model(&self) -> ColorModel {
        self.active_model
    }

    /// The current color expressed in the active model.
    pub fn active_color(&self) -> AnyColor {
        self.color.to_model(self.active_model)
    }

    pub fn subscribe(&mut self, observer: impl ColorObserver + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        debug!(id = id.0, observers = self.observers.len(), "observer subscribed");
        id
    }

    /// Removes an observer. Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        let removed = self.observers.len() != before;
        debug!(id = id.0, removed, "observer unsubscribed");
        removed
    }

    /// Replaces the current color. Observers are only notified if it differs.
    pub fn set_color(&mut self, color: AnyColor) {
        if color == self.color {
            return;
        }
        debug!(%color, "color set");
        self.color = color;
        self.notify(None);
    }

    pub fn set_active_model(&mut self, model: ColorModel) {
        if model == self.active_model {
            return;
        }
        debug!(from = %self.active_model, to = %model, "active model switched");
        self.active_model = model;
        self.notify(None);
    }

    /// Applies a field edit. Observers are only notified if the color changed.
    pub fn apply(&mut self, change: FieldChange) {
        let next = change.apply_to(self.color);
        if next == self.color {
            debug!(?change, "field change had no effect");
            return;
        }
        debug!(?change, color = %next, "field changed");
        self.color = next;
        self.notify(Some(change));
    }

    fn notify(&mut self, change: Option<FieldChange>) {
        let event = ColorEvent {
            color: self.color,
            active_model: self.active_model,
            change,
        };
        for (_, observer) in &mut self.observers {
            observer.on_color_changed(&event);
        }
    }
}

impl Default for PickerState {
    fn default() -> Self {
        Self::new(AnyColor::Rgb(Rgb::EMPTY), ColorModel::Rgb)
    }
}

impl std::fmt::Debug for PickerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PickerState")
            .field("color", &self.color)
            .field("active_model", &self.active_model)
            .field("observers", &self.observers.len())
            .finish()
    }
}
