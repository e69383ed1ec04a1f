//! Unified calculator driver
//!
//! Scenario checks are written once against [`CalculatorDriver`] and run
//! against both the headless view and the terminal window.
//!
//! ```rust
//! use pycalc::driver::{CalculatorDriver, HeadlessDriver};
//!
//! let mut driver = HeadlessDriver::new();
//! driver.type_keys("7+3=");
//! assert_eq!(driver.display(), "10");
//! ```

use tracing::warn;

use crate::controller::Controller;
use crate::core::evaluator::Evaluator;
use crate::core::ERROR_MARKER;
use crate::keypad::KeyAction;
use crate::view::{CalculatorView, HeadlessView};

/// Abstract driver for calculator interactions
pub trait CalculatorDriver {
    /// Presses a keypad button
    fn press(&mut self, action: KeyAction);

    /// Presses Enter with the display focused
    fn submit(&mut self);

    /// Current display text
    fn display(&self) -> String;

    /// Presses the button for each character of `keys`
    ///
    /// Characters without a button are skipped. Returns how many were
    /// pressed.
    fn type_keys(&mut self, keys: &str) -> usize {
        let mut pressed = 0;
        for c in keys.chars() {
            match KeyAction::from_char(c) {
                Some(action) => {
                    self.press(action);
                    pressed += 1;
                }
                None => warn!(key = %c, "no button for key"),
            }
        }
        pressed
    }

    /// Presses C
    fn clear(&mut self) {
        self.press(KeyAction::Clear);
    }
}

/// Driver over [`HeadlessView`]
#[derive(Debug)]
pub struct HeadlessDriver {
    view: HeadlessView,
    controller: Controller<Evaluator>,
}

impl Default for HeadlessDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessDriver {
    /// Creates a driver with an empty display
    #[must_use]
    pub fn new() -> Self {
        let view = HeadlessView::new();
        let controller = Controller::new(Evaluator::new(), &view, ERROR_MARKER);
        Self { view, controller }
    }

    /// Returns the view
    #[must_use]
    pub fn view(&self) -> &HeadlessView {
        &self.view
    }
}

impl CalculatorDriver for HeadlessDriver {
    fn press(&mut self, action: KeyAction) {
        self.controller.trigger(&mut self.view, action);
    }

    fn submit(&mut self) {
        self.controller.submit(&mut self.view);
    }

    fn display(&self) -> String {
        self.view.display_text().to_string()
    }
}

/// TUI Driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::CalculatorDriver;
    use crate::keypad::KeyAction;
    use crate::tui::{CalculatorApp, InputEvent};

    /// Driver over the terminal window, fed through its input path
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a driver with the default window
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, action: KeyAction) {
            self.app.handle(InputEvent::Key(action));
        }

        fn submit(&mut self) {
            self.app.handle(InputEvent::Submit);
        }

        fn display(&self) -> String {
            self.app.display_text().to_string()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified scenario checks =====
// These work with ANY CalculatorDriver implementation

/// Verifies the type, evaluate, clear round trip
pub fn verify_round_trip<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.type_keys("7+3");
    assert_eq!(driver.display(), "7+3");
    driver.type_keys("=");
    assert_eq!(driver.display(), "10");
    driver.clear();
    assert_eq!(driver.display(), "");
}

/// Verifies operator precedence and grouping
pub fn verify_precedence<D: CalculatorDriver>(driver: &mut D) {
    for (keys, expected) in [
        ("2+3*4=", "14"),
        ("(2+3)*4=", "20"),
        ("10-4-3=", "3"),
        ("-(2+3)=", "-5"),
        ("2**3**2=", "512"),
        ("-2**2=", "-4"),
    ] {
        driver.clear();
        driver.type_keys(keys);
        assert_eq!(driver.display(), expected, "keys {keys}");
    }
    driver.clear();
}

/// Verifies true division, floor division and float rendering
pub fn verify_number_rendering<D: CalculatorDriver>(driver: &mut D) {
    for (keys, expected) in [
        ("7/2=", "3.5"),
        ("4/2=", "2.0"),
        ("2.5*2=", "5.0"),
        ("7//2=", "3"),
        ("-7//2=", "-4"),
        ("00+1=", "1"),
        (".1+.2=", "0.30000000000000004"),
    ] {
        driver.clear();
        driver.type_keys(keys);
        assert_eq!(driver.display(), expected, "keys {keys}");
    }
    driver.clear();
}

/// Verifies failures show the marker and the next key replaces it
pub fn verify_error_reset<D: CalculatorDriver>(driver: &mut D) {
    for keys in ["1/0=", "=", "07=", "2+=", "(1="] {
        driver.clear();
        driver.type_keys(keys);
        assert_eq!(driver.display(), ERROR_MARKER, "keys {keys}");
    }

    driver.type_keys("3");
    assert_eq!(driver.display(), "3");

    driver.type_keys("/0=");
    driver.clear();
    assert_eq!(driver.display(), "");
}

/// Verifies Enter on the display evaluates like =
pub fn verify_submit<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.type_keys("6*7");
    driver.submit();
    assert_eq!(driver.display(), "42");
    driver.type_keys("+1");
    driver.submit();
    assert_eq!(driver.display(), "43");
    driver.clear();
}

/// Runs every scenario check
pub fn run_all_scenarios<D: CalculatorDriver>(driver: &mut D) {
    verify_round_trip(driver);
    verify_precedence(driver);
    verify_number_rendering(driver);
    verify_error_reset(driver);
    verify_submit(driver);
}
