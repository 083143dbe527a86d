//! Integer literals: `[ws]*[+-]?[0[xXdDoObB]]?digit+`.
//!
//! A small state machine settles the sign and base from the prefix; the
//! digits that follow are folded into a digit vector with the scalar kernels.

use crate::arithmetic::{add::vec_add_small_on, multiply::vec_mul_small_on};
use crate::digit::Digit;
use crate::sign::{convert_sm_to_2c_to_sm, Sign, Signedness};
use crate::vector::vec_zero;
use crate::{Error, Result};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Base {
    Bin,
    Oct,
    /// Also the placeholder for "no base given", which a caller's base overrides.
    Dec,
    Hex,
}

impl Default for Base {
    fn default() -> Self {
        Base::Dec
    }
}

impl Base {
    pub const fn radix(self) -> Digit {
        match self {
            Base::Bin => 2,
            Base::Oct => 8,
            Base::Dec => 10,
            Base::Hex => 16,
        }
    }

    fn from_letter(c: char) -> Option<Self> {
        match c {
            'b' | 'B' => Some(Base::Bin),
            'o' | 'O' => Some(Base::Oct),
            'd' | 'D' => Some(Base::Dec),
            'x' | 'X' => Some(Base::Hex),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum State {
    Start,
    /// after a leading `0`, which may open a base prefix
    Zero,
    /// after an explicit sign
    Signed,
    /// sign and base are settled, digits follow
    Finish,
}

/// The literal prefix scanner.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Fsm {
    pub state: State,
    pub sign: Sign,
    pub base: Base,
}

impl Default for Fsm {
    fn default() -> Self {
        Self { state: State::Start, sign: Sign::Pos, base: Base::Dec }
    }
}

impl Fsm {
    /// Feed one (non-whitespace) character, returning how many characters of
    /// the prefix this transition consumed.
    ///
    /// A `0` is never consumed on its own: if no base letter follows, it is
    /// the first digit.
    pub fn fsm_move(&mut self, c: char) -> usize {
        match self.state {
            State::Start => match c {
                '0' => {
                    self.sign = Sign::Pos;
                    self.state = State::Zero;
                    0
                }
                '+' => {
                    self.sign = Sign::Pos;
                    self.state = State::Signed;
                    1
                }
                '-' => {
                    self.sign = Sign::Neg;
                    self.state = State::Signed;
                    1
                }
                _ => {
                    self.sign = Sign::Pos;
                    self.base = Base::Dec;
                    self.state = State::Finish;
                    0
                }
            },
            State::Zero => {
                self.state = State::Finish;
                match Base::from_letter(c) {
                    Some(base) => {
                        self.base = base;
                        2
                    }
                    None => {
                        self.base = Base::Dec;
                        0
                    }
                }
            }
            State::Signed => {
                if c == '0' {
                    self.state = State::Zero;
                } else {
                    self.base = Base::Dec;
                    self.state = State::Finish;
                }
                0
            }
            State::Finish => 0,
        }
    }
}

/// Sign and base of a literal, and the byte offset of its first digit.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Literal {
    pub sign: Sign,
    pub base: Base,
    pub start: usize,
}

/// Scan the prefix of `text`, skipping whitespace before each character.
///
/// `start` is one past the last prefix character, or the first significant
/// character when there is no prefix; whitespace there is not a digit.
pub fn get_base_and_sign(text: &str) -> Literal {
    let mut fsm = Fsm::default();
    let mut first = None;
    // one past the last character the prefix consumed
    let mut consumed = None;

    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            continue;
        }
        first.get_or_insert(i);

        if fsm.fsm_move(c) > 0 {
            consumed = Some(i + c.len_utf8());
        }
        if fsm.state == State::Finish {
            break;
        }
    }

    // the digits follow the prefix immediately
    let start = consumed.or(first).unwrap_or(text.len());

    Literal { sign: fsm.sign, base: fsm.base, start }
}

/// Parse `text` into the `nb`-bit signed value `digits`, returning its sign.
///
/// `base`, if given, must agree with the literal's prefix; a literal without
/// prefix (or with `0d`) takes the given base. The value is reduced to `nb`
/// bits; `digits` must be `digits_for_bits(nb)` long.
pub fn vec_from_str(nb: usize, digits: &mut [Digit], text: &str, base: Option<Base>) -> Result<Sign> {
    let literal = get_base_and_sign(text);

    let base = match base {
        None => literal.base,
        Some(expected) if expected == literal.base || literal.base == Base::Dec => expected,
        Some(expected) => {
            error!("The base set in the program does not match the base in the input string.");
            return Err(Error::BaseConflict { expected, found: literal.base });
        }
    };

    let body = &text[literal.start..];
    if body.is_empty() {
        error!("The char string must contain at least one digit.");
        return Err(Error::NoDigits);
    }

    let radix = base.radix();
    vec_zero(digits);

    for c in body.chars() {
        let val = match c.to_digit(36) {
            Some(val) if (val as Digit) < radix => val as Digit,
            _ => {
                error!("{} is not a valid digit in base {}", c, radix);
                return Err(Error::InvalidDigit { digit: c, base });
            }
        };

        // only the low `nb` bits survive the final reduction
        vec_mul_small_on(digits, radix);
        vec_add_small_on(digits, val);
    }

    Ok(convert_sm_to_2c_to_sm(Signedness::Signed, literal.sign, nb, digits))
}
