/// An entity addressed by a stable, typed identifier.
pub trait Identifiable {
    type Id: Copy + Eq;

    fn id(&self) -> Self::Id;
}

/// Find an entity by id in a slice, preserving the first match.
pub fn find_by_id<T: Identifiable>(items: &[T], id: T::Id) -> Option<&T> {
    items.iter().find(|item| item.id() == id)
}
