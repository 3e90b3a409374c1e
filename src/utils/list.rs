//! # List Helpers
//!
//! Extension methods for `Vec` covering random selection, rotation, and
//! reordering.
//!
//! Randomized helpers take the generator as an argument so callers control
//! seeding; there is no shared global RNG.

use rand::seq::SliceRandom;
use rand::Rng;

/// Extra list operations for `Vec<T>`.
///
/// # Examples
///
/// ```
/// use gridkit::ListExt;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut list = vec![1, 2, 3, 4];
/// list.rotate_to_left();
/// assert_eq!(list, vec![2, 3, 4, 1]);
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let picked = list.pull_random(&mut rng).unwrap();
/// assert_eq!(list.len(), 3);
/// assert!(!list.contains(&picked));
/// ```
pub trait ListExt<T> {
    /// Element halfway through the list (index `len / 2`).
    fn middle_item(&self) -> Option<&T>;

    /// Removes the element at `from` and reinserts it at `to`, keeping the
    /// relative order of everything else. Returns false and leaves the list
    /// untouched if either index is out of range.
    fn move_item(&mut self, from: usize, to: usize) -> bool;

    /// Returns true if `index` addresses an element of this list.
    fn index_in_range(&self, index: isize) -> bool;

    /// Removes and returns the first element.
    fn pull_first(&mut self) -> Option<T>;

    /// Removes and returns a randomly chosen element.
    fn pull_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<T>;

    fn random_index<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize>;

    /// Returns a randomly chosen element without removing it.
    fn random_item<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&T>;

    /// Moves every element one place towards the front; the first becomes last.
    fn rotate_to_left(&mut self);

    /// Moves every element one place towards the back; the last becomes first.
    fn rotate_to_right(&mut self);

    /// Shuffles the list in place.
    fn shuffle_items<R: Rng + ?Sized>(&mut self, rng: &mut R);
}

impl<T> ListExt<T> for Vec<T> {
    fn middle_item(&self) -> Option<&T> {
        self.get(self.len() / 2)
    }

    fn move_item(&mut self, from: usize, to: usize) -> bool {
        if from >= self.len() || to >= self.len() {
            return false;
        }
        let item = self.remove(from);
        self.insert(to, item);
        true
    }

    fn index_in_range(&self, index: isize) -> bool {
        index >= 0 && (index as usize) < self.len()
    }

    fn pull_first(&mut self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            Some(self.remove(0))
        }
    }

    fn pull_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<T> {
        let index = self.random_index(rng)?;
        Some(self.remove(index))
    }

    fn random_index<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(rng.gen_range(0..self.len()))
        }
    }

    fn random_item<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&T> {
        self.as_slice().choose(rng)
    }

    fn rotate_to_left(&mut self) {
        if !self.is_empty() {
            self.rotate_left(1);
        }
    }

    fn rotate_to_right(&mut self) {
        if !self.is_empty() {
            self.rotate_right(1);
        }
    }

    fn shuffle_items<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.as_mut_slice().shuffle(rng);
    }
}
