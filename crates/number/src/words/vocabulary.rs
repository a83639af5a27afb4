//! Word tables for Bangla and English
//!
//! Scale boundaries follow the Indian numbering system: hundred (10^2),
//! thousand (10^3), lakh (10^5), crore (10^7).

use bangla_utils_core::Language;

/// A place-value scale word
#[derive(Debug, Clone, Copy)]
pub struct Scale {
    /// Power of ten this scale starts at
    pub exponent: usize,
    pub word: &'static str,
    /// Joins the quotient phrase to the scale word
    pub separator: &'static str,
}

/// Values 10-99
#[derive(Debug, Clone, Copy)]
pub enum Tens {
    /// One irregular word per value, index = value - 10
    Flat(&'static [&'static str; 90]),
    /// Irregular teens, otherwise `tens[value / 10]-units[value % 10]`
    Composed {
        teens: &'static [&'static str; 10],
        tens: &'static [&'static str; 10],
    },
}

/// Currency tokens
#[derive(Debug, Clone, Copy)]
pub struct CurrencyWords {
    pub taka: &'static str,
    pub poisha: &'static str,
    pub connector: &'static str,
    pub suffix: &'static str,
}

/// Full word set for one language
#[derive(Debug)]
pub struct Vocabulary {
    /// Standalone zero, used for a whole value of zero and in digit-wise reading
    pub zero: &'static str,
    /// Units 0-9; 0 is empty because it only occurs as a remainder
    pub units: [&'static str; 10],
    pub tens: Tens,
    /// Largest first
    pub scales: [Scale; 4],
    pub point: &'static str,
    pub currency: CurrencyWords,
}

impl Vocabulary {
    /// Word for a single digit, zero included
    pub fn digit(&self, digit: u8) -> &'static str {
        match digit {
            0 => self.zero,
            d => self.units[d as usize],
        }
    }

    /// Words for a value below one hundred; zero yields an empty string
    pub fn below_hundred(&self, value: u8) -> String {
        debug_assert!(value < 100, "value {} is not below one hundred", value);
        if value < 10 {
            return self.units[value as usize].to_string();
        }

        match self.tens {
            Tens::Flat(table) => table[(value - 10) as usize].to_string(),
            Tens::Composed { teens, tens } => {
                if value < 20 {
                    return teens[(value - 10) as usize].to_string();
                }
                let unit = value % 10;
                let ten = tens[(value / 10) as usize];
                if unit == 0 {
                    ten.to_string()
                } else {
                    format!("{}-{}", ten, self.units[unit as usize])
                }
            }
        }
    }
}

/// Vocabulary for a language
pub fn vocabulary(language: Language) -> &'static Vocabulary {
    match language {
        Language::Bangla => &BANGLA,
        Language::English => &ENGLISH,
    }
}

static BANGLA: Vocabulary = Vocabulary {
    zero: "শূন্য",
    units: ["", "এক", "দুই", "তিন", "চার", "পাঁচ", "ছয়", "সাত", "আট", "নয়"],
    tens: Tens::Flat(&BANGLA_TENS),
    scales: [
        Scale {
            exponent: 7,
            word: "কোটি",
            separator: " ",
        },
        Scale {
            exponent: 5,
            word: "লক্ষ",
            separator: " ",
        },
        Scale {
            exponent: 3,
            word: "হাজার",
            separator: " ",
        },
        Scale {
            exponent: 2,
            word: "শত",
            separator: "",
        },
    ],
    point: "দশমিক",
    currency: CurrencyWords {
        taka: "টাকা",
        poisha: "পয়সা",
        connector: "এবং",
        suffix: "মাত্র।",
    },
};

static ENGLISH: Vocabulary = Vocabulary {
    zero: "zero",
    units: [
        "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
    ],
    tens: Tens::Composed {
        teens: &[
            "ten",
            "eleven",
            "twelve",
            "thirteen",
            "fourteen",
            "fifteen",
            "sixteen",
            "seventeen",
            "eighteen",
            "nineteen",
        ],
        tens: &[
            "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
        ],
    },
    scales: [
        Scale {
            exponent: 7,
            word: "crore",
            separator: " ",
        },
        Scale {
            exponent: 5,
            word: "lakh",
            separator: " ",
        },
        Scale {
            exponent: 3,
            word: "thousand",
            separator: " ",
        },
        Scale {
            exponent: 2,
            word: "hundred",
            separator: " ",
        },
    ],
    point: "point",
    currency: CurrencyWords {
        taka: "taka",
        poisha: "poisha",
        connector: "and",
        suffix: "only.",
    },
};

static BANGLA_TENS: [&str; 90] = [
    "দশ",
    "এগারো",
    "বারো",
    "তেরো",
    "চৌদ্দ",
    "পনেরো",
    "ষোল",
    "সতেরো",
    "আঠারো",
    "উনিশ",
    "বিশ",
    "একুশ",
    "বাইশ",
    "তেইশ",
    "চব্বিশ",
    "পঁচিশ",
    "ছাব্বিশ",
    "সাতাশ",
    "আটাশ",
    "ঊনত্রিশ",
    "ত্রিশ",
    "একত্রিশ",
    "বত্রিশ",
    "তেত্রিশ",
    "চৌত্রিশ",
    "পঁয়ত্রিশ",
    "ছত্রিশ",
    "সাঁইত্রিশ",
    "আটত্রিশ",
    "ঊনচল্লিশ",
    "চল্লিশ",
    "একচল্লিশ",
    "বিয়াল্লিশ",
    "তেতাল্লিশ",
    "চুয়াল্লিশ",
    "পঁয়তাল্লিশ",
    "ছেচল্লিশ",
    "সাতচল্লিশ",
    "আটচল্লিশ",
    "ঊনপঞ্চাশ",
    "পঞ্চাশ",
    "একান্ন",
    "বায়ান্ন",
    "তিপ্পান্ন",
    "চুয়ান্ন",
    "পঞ্চান্ন",
    "ছাপ্পান্ন",
    "সাতান্ন",
    "আটান্ন",
    "ঊনষাট",
    "ষাট",
    "একষট্টি",
    "বাষট্টি",
    "তেষট্টি",
    "চৌষট্টি",
    "পঁয়ষট্টি",
    "ছেষট্টি",
    "সাতষট্টি",
    "আটষট্টি",
    "ঊনসত্তর",
    "সত্তর",
    "একাত্তর",
    "বাহাত্তর",
    "তিয়াত্তর",
    "চুয়াত্তর",
    "পঁচাত্তর",
    "ছিয়াত্তর",
    "সাতাত্তর",
    "আটাত্তর",
    "ঊনআশি",
    "আশি",
    "একাশি",
    "বিরাশি",
    "তিরাশি",
    "চুরাশি",
    "পঁচাশি",
    "ছিয়াশি",
    "সাতাশি",
    "অষ্টাশি",
    "ঊননব্বই",
    "নব্বই",
    "একানব্বই",
    "বিরানব্বই",
    "তিরানব্বই",
    "চুরানব্বই",
    "পঁচানব্বই",
    "ছিয়ানব্বই",
    "সাতানব্বই",
    "আটানব্বই",
    "নিরানব্বই",
];
