//! Random sampling without replacement.

use rand::{Rng, seq::SliceRandom};

/// Pick up to `size` items at random: shuffle, then truncate.
///
/// When there are no more than `size` items they are returned as given,
/// unshuffled.
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use jsql::sampling::random_subset;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let picked = random_subset((0..10).collect(), 3, &mut rng);
/// assert_eq!(picked.len(), 3);
/// assert_eq!(random_subset(vec![1, 2], 3, &mut rng), vec![1, 2]);
/// ```
pub fn random_subset<T, R>(mut items: Vec<T>, size: usize, rng: &mut R) -> Vec<T>
where
    R: Rng + ?Sized,
{
    if items.len() <= size {
        return items;
    }
    items.shuffle(rng);
    items.truncate(size);
    items
}
