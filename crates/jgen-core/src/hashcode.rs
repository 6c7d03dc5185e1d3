use std::fmt;

use rand::Rng;

/// An odd `i32`. Hash code seeds and multipliers are only ever carried in this form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OddNumber(i32);

impl OddNumber {
    pub const SEVENTEEN: OddNumber = OddNumber(17);
    pub const THIRTY_SEVEN: OddNumber = OddNumber(37);

    /// Returns `None` for even values.
    pub fn new(value: i32) -> Option<Self> {
        (value % 2 != 0).then_some(Self(value))
    }

    /// Parse and check text as typed into a numeric option field.
    pub fn parse(text: &str) -> Option<Self> {
        text.parse::<i32>().ok().and_then(Self::new)
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for OddNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Initial value and multiplier used to fold field hashes together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InitMultPair {
    pub initial: OddNumber,
    pub multiplier: OddNumber,
}

impl InitMultPair {
    pub const DEFAULT: InitMultPair = InitMultPair {
        initial: OddNumber::SEVENTEEN,
        multiplier: OddNumber::THIRTY_SEVEN,
    };

    pub fn new(initial: OddNumber, multiplier: OddNumber) -> Self {
        Self {
            initial,
            multiplier,
        }
    }

    pub fn as_tuple(&self) -> (i32, i32) {
        (self.initial.get(), self.multiplier.get())
    }
}

impl Default for InitMultPair {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// How the seed/multiplier pair is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitMultNumbers {
    /// Always 17 / 37.
    Default,
    /// A fresh odd pair per call.
    Random,
    /// User supplied; the only persisted variant.
    Custom(InitMultPair),
}

impl InitMultNumbers {
    pub fn init_mult_type(&self) -> InitMultType {
        match self {
            InitMultNumbers::Default => InitMultType::Default,
            InitMultNumbers::Random => InitMultType::Random,
            InitMultNumbers::Custom(_) => InitMultType::Custom,
        }
    }

    pub fn numbers(&self) -> InitMultPair {
        match self {
            InitMultNumbers::Default => InitMultPair::DEFAULT,
            InitMultNumbers::Random => random_pair(&mut rand::thread_rng()),
            InitMultNumbers::Custom(pair) => *pair,
        }
    }
}

fn random_odd<R: Rng>(rng: &mut R) -> OddNumber {
    // 5..=99; 1 and 3 make poor multipliers
    OddNumber(rng.gen_range(2..50) * 2 + 1)
}

fn random_pair<R: Rng>(rng: &mut R) -> InitMultPair {
    InitMultPair::new(random_odd(rng), random_odd(rng))
}

/// Persisted selector for [`InitMultNumbers`], stored as its index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum InitMultType {
    #[default]
    Default,
    Random,
    Custom,
}

impl InitMultType {
    pub const ALL: [InitMultType; 3] = [
        InitMultType::Default,
        InitMultType::Random,
        InitMultType::Custom,
    ];

    pub fn index(&self) -> i32 {
        match self {
            InitMultType::Default => 0,
            InitMultType::Random => 1,
            InitMultType::Custom => 2,
        }
    }

    pub fn from_index(index: i32) -> Option<Self> {
        InitMultType::ALL.into_iter().find(|t| t.index() == index)
    }

    /// Pair this selector with the last custom numbers.
    pub fn with_custom(self, custom: InitMultPair) -> InitMultNumbers {
        match self {
            InitMultType::Default => InitMultNumbers::Default,
            InitMultType::Random => InitMultNumbers::Random,
            InitMultType::Custom => InitMultNumbers::Custom(custom),
        }
    }
}
