use log::{ debug, trace };
use crate::math::FiniteField;
use super::Recurrence;

// TYPES AND INTERFACES
// ================================================================================================

/// Online Berlekamp-Massey synthesizer. Terms are fed one at a time and the shortest linear
/// recurrence consistent with all terms seen so far can be read at any point.
///
/// The connection polynomial is kept in the form C(x) = 1 + c_1 x + ... + c_l x^l, so that
/// a[i] + c_1 a[i - 1] + ... + c_l a[i - l] = 0 for all i >= l.
#[derive(Clone, Debug)]
pub struct RecurrenceSynthesizer<E: FiniteField> {
    current     : Vec<E>,   // C(x)
    previous    : Vec<E>,   // C(x) as it was before the last length change
    length      : usize,    // l
    shift       : usize,    // steps since the last length change
    discrepancy : E,        // discrepancy observed at the last length change
    terms       : Vec<E>,
}

// RECURRENCE SYNTHESIZER IMPLEMENTATION
// ================================================================================================
impl<E: FiniteField> RecurrenceSynthesizer<E> {

    pub fn new() -> RecurrenceSynthesizer<E> {
        return RecurrenceSynthesizer {
            current     : vec![E::ONE],
            previous    : vec![E::ONE],
            length      : 0,
            shift       : 0,
            discrepancy : E::ONE,
            terms       : Vec::new(),
        };
    }

    /// Feeds the next term of the sequence into the synthesizer and returns the discrepancy
    /// between the term and the value predicted by the recurrence found so far.
    pub fn push(&mut self, value: E) -> E {
        let i = self.terms.len();
        self.terms.push(value);
        self.shift += 1;

        let mut d = value;
        for j in 1..=self.length {
            d = E::add(d, E::mul(self.current[j], self.terms[i - j]));
        }

        if d == E::ZERO {
            return d;
        }

        // C(x) = C(x) - (d / p) * x^m * B(x); `discrepancy` is never zero: it starts at one and
        // is only ever replaced with a non-zero discrepancy
        let snapshot = self.current.clone();
        let q = E::div(d, self.discrepancy);
        let m = self.shift;
        if self.current.len() < self.previous.len() + m {
            self.current.resize(self.previous.len() + m, E::ZERO);
        }
        for j in 0..self.previous.len() {
            self.current[j + m] = E::sub(self.current[j + m], E::mul(q, self.previous[j]));
        }

        if 2 * self.length <= i {
            trace!("recurrence length changed from {} to {} at term {}", self.length, i + 1 - self.length, i);
            self.previous = snapshot;
            self.length = i + 1 - self.length;
            self.shift = 0;
            self.discrepancy = d;
            if self.current.len() <= self.length {
                self.current.resize(self.length + 1, E::ZERO);
            }
        }

        return d;
    }

    pub fn extend(&mut self, values: &[E]) {
        for &value in values {
            self.push(value);
        }
    }

    /// Returns the order of the shortest recurrence consistent with the terms seen so far.
    pub fn order(&self) -> usize {
        return self.length;
    }

    /// Returns the number of terms fed into the synthesizer.
    pub fn len(&self) -> usize {
        return self.terms.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.terms.is_empty();
    }

    /// Returns the recurrence in a[i] = c[0] a[i - 1] + ... + c[d - 1] a[i - d] form. Its order is
    /// always equal to `order()`; coefficients of C(x) above degree l are zero and are dropped.
    pub fn recurrence(&self) -> Recurrence<E> {
        let coefficients = (1..=self.length)
            .map(|j| E::neg(self.current.get(j).copied().unwrap_or(E::ZERO)))
            .collect();
        return Recurrence::new(coefficients);
    }
}

impl<E: FiniteField> Default for RecurrenceSynthesizer<E> {
    fn default() -> Self {
        return Self::new();
    }
}

// PUBLIC FUNCTIONS
// ================================================================================================

/// Finds the shortest linear recurrence which generates `sequence`.
///
/// The result is guaranteed to be minimal only when the sequence is at least twice as long as
/// the order of the recurrence which produced it; shorter prefixes may yield a longer or a
/// spurious recurrence. An all-zero sequence yields the empty recurrence.
pub fn find_linear_recurrence<E: FiniteField>(sequence: &[E]) -> Recurrence<E> {
    let mut synthesizer = RecurrenceSynthesizer::new();
    synthesizer.extend(sequence);
    let result = synthesizer.recurrence();
    debug!("synthesized recurrence of order {} from {} terms", result.order(), sequence.len());
    return result;
}
