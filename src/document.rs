//! Document surface seam: the content root and the optional toggle control.
//!
//! DESIGN
//! ======
//! Adapters own their own DOM error handling. A failed class or markup
//! update is logged by the adapter and never reaches the controller, which
//! keeps the controller's contract infallible.

/// The page the controller decorates.
pub trait ThemeDocument {
    type Control: ToggleControl;

    /// Add (`enabled`) or remove the marker class on the content root.
    fn set_marker_class(&self, class: &str, enabled: bool);

    /// Look up the toggle control by element id.
    fn find_control(&self, id: &str) -> Option<Self::Control>;
}

/// The interactive element that flips the preference.
pub trait ToggleControl {
    /// Replace the control's inner markup.
    fn set_markup(&self, markup: &str);

    /// Register `handler` to run on every activation (click).
    fn on_activate(&self, handler: Box<dyn Fn()>);
}
