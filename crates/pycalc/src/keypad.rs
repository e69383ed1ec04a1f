//! Key actions and the fixed keypad grid
//!
//! ```text
//! [ 7 ] [ 8 ] [ 9 ] [ / ] [ C ]
//! [ 4 ] [ 5 ] [ 6 ] [ * ] [ ( ]
//! [ 1 ] [ 2 ] [ 3 ] [ - ] [ ) ]
//! [ 0 ] [00 ] [ . ] [ + ] [ = ]
//! ```

/// Number of button rows
pub const GRID_ROWS: usize = 4;

/// Number of button columns
pub const GRID_COLUMNS: usize = 5;

/// Every keypad input. The set is closed: there is no way to build an
/// action outside these twenty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyAction {
    /// 0
    Zero,
    /// 1
    One,
    /// 2
    Two,
    /// 3
    Three,
    /// 4
    Four,
    /// 5
    Five,
    /// 6
    Six,
    /// 7
    Seven,
    /// 8
    Eight,
    /// 9
    Nine,
    /// 00
    DoubleZero,
    /// Decimal point
    Decimal,
    /// +
    Add,
    /// -
    Subtract,
    /// *
    Multiply,
    /// /
    Divide,
    /// (
    OpenParen,
    /// )
    CloseParen,
    /// Evaluate the display
    Equals,
    /// Clear the display
    Clear,
}

/// Visual grouping of buttons, used for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Digits, 00 and the decimal point
    Number,
    /// Arithmetic operators
    Operator,
    /// Parentheses
    Paren,
    /// The equals button
    Equals,
    /// The clear button
    Clear,
}

impl KeyAction {
    /// All actions in keypad order (row-major)
    pub const ALL: [KeyAction; GRID_ROWS * GRID_COLUMNS] = [
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Divide,
        Self::Clear,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Multiply,
        Self::OpenParen,
        Self::One,
        Self::Two,
        Self::Three,
        Self::Subtract,
        Self::CloseParen,
        Self::Zero,
        Self::DoubleZero,
        Self::Decimal,
        Self::Add,
        Self::Equals,
    ];

    /// Button label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Zero => "0",
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::DoubleZero => "00",
            Self::Decimal => ".",
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::OpenParen => "(",
            Self::CloseParen => ")",
            Self::Equals => "=",
            Self::Clear => "C",
        }
    }

    /// Text appended to the display, or None for equals and clear
    #[must_use]
    pub const fn text(self) -> Option<&'static str> {
        match self {
            Self::Equals | Self::Clear => None,
            _ => Some(self.label()),
        }
    }

    /// Styling group
    #[must_use]
    pub const fn kind(self) -> ButtonKind {
        match self {
            Self::Add | Self::Subtract | Self::Multiply | Self::Divide => ButtonKind::Operator,
            Self::OpenParen | Self::CloseParen => ButtonKind::Paren,
            Self::Equals => ButtonKind::Equals,
            Self::Clear => ButtonKind::Clear,
            _ => ButtonKind::Number,
        }
    }

    /// Looks up an action by its button label
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.label() == label)
    }

    /// Maps a typed character to the action it stands for
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'c' | 'C' => Some(Self::Clear),
            _ => {
                let mut buf = [0u8; 4];
                Self::from_label(ch.encode_utf8(&mut buf))
            }
        }
    }
}

impl std::fmt::Display for KeyAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The action this button triggers
    pub action: KeyAction,
    /// Whether the button is currently highlighted
    pub pressed: bool,
}

impl KeypadButton {
    /// Creates a released button
    #[must_use]
    pub const fn new(action: KeyAction) -> Self {
        Self {
            action,
            pressed: false,
        }
    }

    /// Returns the button label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.action.label()
    }
}

/// The keypad: 4 rows x 5 columns of buttons
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order
    buttons: Vec<KeypadButton>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        Self {
            buttons: KeyAction::ALL.into_iter().map(KeypadButton::new).collect(),
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (GRID_ROWS, GRID_COLUMNS)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < GRID_ROWS && col < GRID_COLUMNS {
            self.buttons.get(row * GRID_COLUMNS + col)
        } else {
            None
        }
    }

    /// Finds the index of the button for an action
    #[must_use]
    pub fn find_button(&self, action: KeyAction) -> Option<usize> {
        self.buttons.iter().position(|b| b.action == action)
    }

    /// Finds the index of a button by its label
    #[must_use]
    pub fn find_button_by_label(&self, label: &str) -> Option<usize> {
        self.buttons.iter().position(|b| b.label() == label)
    }

    /// Returns the (row, col) of an action's button
    #[must_use]
    pub fn position_of(&self, action: KeyAction) -> Option<(usize, usize)> {
        self.find_button(action)
            .map(|index| (index / GRID_COLUMNS, index % GRID_COLUMNS))
    }

    /// Returns the action `rows`/`cols` steps away, clamped to the grid
    #[must_use]
    pub fn step(&self, from: KeyAction, rows: isize, cols: isize) -> KeyAction {
        let Some((row, col)) = self.position_of(from) else {
            return from;
        };
        let row = row.saturating_add_signed(rows).min(GRID_ROWS - 1);
        let col = col.saturating_add_signed(cols).min(GRID_COLUMNS - 1);
        self.get_button_at(row, col).map_or(from, |b| b.action)
    }

    /// Highlights only the button for `action`
    pub fn highlight(&mut self, action: KeyAction) {
        for btn in &mut self.buttons {
            btn.pressed = btn.action == action;
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.pressed = false;
        }
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Returns an iterator over the actions in keypad order
    pub fn actions(&self) -> impl Iterator<Item = KeyAction> + '_ {
        self.buttons.iter().map(|b| b.action)
    }

    /// Returns an iterator over buttons with their (row, col) positions
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons
            .iter()
            .enumerate()
            .map(|(i, btn)| ((i / GRID_COLUMNS, i % GRID_COLUMNS), btn))
    }
}
