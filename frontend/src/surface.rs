use gloo_console::error;
use gloo_utils::window;
use mapty_lib::{
    collaborators::{Notifier, WorkoutSurface},
    form::FormInput,
    view::WorkoutRow,
    WorkoutType,
};

/// Sidebar state: the form and the workout list, rendered by the app.
pub struct Sidebar {
    pub form_hidden: bool,
    pub visible_variant: WorkoutType,
    pub input: FormInput,
    /// Newest first.
    pub rows: Vec<WorkoutRow>,
    focus_requested: bool,
}

impl Sidebar {
    pub fn new(workout_type: WorkoutType) -> Self {
        Self {
            form_hidden: true,
            visible_variant: workout_type,
            input: FormInput::new(workout_type),
            rows: Vec::new(),
            focus_requested: false,
        }
    }

    /// Focus can only be applied after the form is rendered visible.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }
}

impl WorkoutSurface for Sidebar {
    fn show_form(&mut self) {
        self.form_hidden = false;
    }

    fn hide_form(&mut self) {
        self.form_hidden = true;
    }

    fn focus_distance(&mut self) {
        self.focus_requested = true;
    }

    fn clear_form(&mut self) {
        self.input.clear();
    }

    fn show_variant_field(&mut self, kind: WorkoutType) {
        self.visible_variant = kind;
    }

    fn insert_row(&mut self, row: WorkoutRow) {
        self.rows.insert(0, row);
    }
}

pub struct BrowserAlert;

impl Notifier for BrowserAlert {
    fn alert(&mut self, message: &str) {
        if let Err(err) = window().alert_with_message(message) {
            error!("alert failed", err);
        }
    }
}
