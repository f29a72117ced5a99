use crate::models::Timestamp;

/// Enumerates every (key, timestamp) pair the host knows about.
///
/// Consumed once at session start to seed the registry.
pub trait ItemSource<K> {
    fn items(&mut self) -> Vec<(K, Timestamp)>;
}

/// Adapter turning any iterator of pairs into an [`ItemSource`].
#[derive(Debug, Clone)]
pub struct IterSource<I>(pub I);

impl<K, I> ItemSource<K> for IterSource<I>
where
    I: Iterator<Item = (K, Timestamp)>,
{
    fn items(&mut self) -> Vec<(K, Timestamp)> {
        self.0.by_ref().collect()
    }
}

impl<K: Clone> ItemSource<K> for Vec<(K, Timestamp)> {
    fn items(&mut self) -> Vec<(K, Timestamp)> {
        self.clone()
    }
}
