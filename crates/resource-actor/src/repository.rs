//! # Repositories
//!
//! The storage seam of the framework. A [`ResourceActor`](crate::ResourceActor) owns exactly
//! one repository and is its only writer, so implementations need no synchronization.
//!
//! [`InMemoryRepository`] is the default backing: a `Vec` kept in insertion order and
//! scanned linearly by id. Nothing survives a restart.

use crate::entity::ActorEntity;

/// Storage operations a `ResourceActor` needs from its collection.
pub trait Repository<T: ActorEntity>: Send {
    /// Every stored entity, in insertion order.
    fn find_all(&self) -> Vec<T>;

    fn find_by_id(&self, id: &T::Id) -> Option<&T>;

    fn find_by_id_mut(&mut self, id: &T::Id) -> Option<&mut T>;

    /// Appends an entity. Callers guarantee the id is not already present.
    fn insert(&mut self, item: T);

    /// Removes and returns the entity with the given id, if any.
    fn remove_by_id(&mut self, id: &T::Id) -> Option<T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Insertion-ordered, process-local repository.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T> {
    items: Vec<T>,
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: ActorEntity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: ActorEntity> From<Vec<T>> for InMemoryRepository<T> {
    /// Seeds the repository with pre-existing entities, keeping their order.
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T: ActorEntity> Repository<T> for InMemoryRepository<T> {
    fn find_all(&self) -> Vec<T> {
        self.items.clone()
    }

    fn find_by_id(&self, id: &T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    fn find_by_id_mut(&mut self, id: &T::Id) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    fn insert(&mut self, item: T) {
        self.items.push(item);
    }

    fn remove_by_id(&mut self, id: &T::Id) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: String,
        text: String,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Note error")]
    struct NoteError;

    impl ActorEntity for Note {
        type Id = String;
        type Create = String;
        type Update = String;
        type Error = NoteError;

        fn id(&self) -> &String {
            &self.id
        }

        fn from_create_params(id: String, text: String) -> Result<Self, Self::Error> {
            Ok(Self { id, text })
        }

        fn on_update(&mut self, text: String) -> Result<(), Self::Error> {
            self.text = text;
            Ok(())
        }
    }

    fn note(id: &str) -> Note {
        Note {
            id: id.to_string(),
            text: format!("note {id}"),
        }
    }

    #[test]
    fn find_all_keeps_insertion_order() {
        let mut repo = InMemoryRepository::from(vec![note("b"), note("a")]);
        repo.insert(note("c"));

        let ids: Vec<_> = repo.find_all().into_iter().map(|n| n.id).collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }

    #[test]
    fn lookup_is_exact() {
        let repo = InMemoryRepository::from(vec![note("1"), note("10")]);

        assert_eq!(repo.find_by_id(&"10".to_string()), Some(&note("10")));
        assert!(repo.find_by_id(&"01".to_string()).is_none());
    }

    #[test]
    fn remove_by_id_only_removes_the_match() {
        let mut repo = InMemoryRepository::from(vec![note("1"), note("2"), note("3")]);

        assert_eq!(repo.remove_by_id(&"2".to_string()), Some(note("2")));
        assert_eq!(repo.len(), 2);
        assert!(repo.remove_by_id(&"2".to_string()).is_none());
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn find_by_id_mut_edits_in_place() {
        let mut repo = InMemoryRepository::<Note>::new();
        assert!(repo.is_empty());
        repo.insert(note("1"));

        repo.find_by_id_mut(&"1".to_string()).unwrap().text = "edited".to_string();
        assert_eq!(repo.find_all()[0].text, "edited");
    }
}
