//! User registry: CRUD and search over library members

use tracing::debug;

use crate::{
    error::{AppError, AppResult},
    models::user::{NewUser, User, UserPatch},
    storage::Storage,
};

/// Manages the user collection, keyed by user ID.
pub struct UserRepository {
    store: Box<dyn Storage<User>>,
    users: Vec<User>,
}

impl UserRepository {
    /// Load the members from the given store.
    pub fn new(store: Box<dyn Storage<User>>) -> AppResult<Self> {
        let users = store.load_all()?;
        Ok(Self { store, users })
    }

    /// All users, in collection order.
    pub fn all(&self) -> &[User] {
        &self.users
    }

    /// Add a new user. The user ID must be unused.
    pub fn add(&mut self, new: NewUser) -> AppResult<()> {
        if self.users.iter().any(|u| u.user_id == new.user_id) {
            return Err(AppError::Duplicate(format!(
                "user with ID {} already exists",
                new.user_id
            )));
        }

        debug!(user_id = %new.user_id, "adding user");
        self.users.push(User {
            name: new.name,
            user_id: new.user_id,
        });
        self.save()
    }

    /// Delete the user with the given ID.
    pub fn delete(&mut self, user_id: &str) -> AppResult<()> {
        let pos = self
            .users
            .iter()
            .position(|u| u.user_id == user_id)
            .ok_or_else(|| AppError::NotFound(format!("no user with ID {user_id}")))?;

        self.users.remove(pos);
        self.save()?;

        debug!(%user_id, "user deleted");
        Ok(())
    }

    /// Update the user with the given ID, applying only the provided
    /// fields. Moving to an ID held by a different user is rejected.
    pub fn update(&mut self, user_id: &str, patch: UserPatch) -> AppResult<()> {
        let pos = self
            .users
            .iter()
            .position(|u| u.user_id == user_id)
            .ok_or_else(|| AppError::NotFound(format!("no user with ID {user_id}")))?;

        if let Some(ref new_id) = patch.user_id {
            if self
                .users
                .iter()
                .enumerate()
                .any(|(i, u)| i != pos && u.user_id == *new_id)
            {
                return Err(AppError::Duplicate(format!(
                    "user with ID {new_id} already exists"
                )));
            }
        }

        let user = &mut self.users[pos];
        if let Some(name) = patch.name {
            user.name = name;
        }
        if let Some(new_id) = patch.user_id {
            user.user_id = new_id;
        }
        self.save()?;

        debug!(%user_id, "user updated");
        Ok(())
    }

    /// Exact-match lookup by user ID.
    pub fn find_by_id(&self, user_id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.user_id == user_id)
    }

    /// Case-insensitive substring match on name, exact-case substring
    /// match on user ID. Results keep collection order.
    pub fn search(&self, term: &str) -> Vec<&User> {
        let needle = term.to_lowercase();
        self.users
            .iter()
            .filter(|u| u.name.to_lowercase().contains(&needle) || u.user_id.contains(term))
            .collect()
    }

    fn save(&self) -> AppResult<()> {
        self.store.save_all(&self.users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MockStorage;

    fn empty_repo() -> UserRepository {
        let mut store = MockStorage::<User>::new();
        store.expect_load_all().return_once(|| Ok(Vec::new()));
        store.expect_save_all().returning(|_| Ok(()));
        UserRepository::new(Box::new(store)).unwrap()
    }

    fn new_user(user_id: &str) -> NewUser {
        NewUser {
            name: "Ada Lovelace".to_string(),
            user_id: user_id.to_string(),
        }
    }

    #[test]
    fn add_rejects_duplicate_id() {
        let mut repo = empty_repo();
        repo.add(new_user("u1")).unwrap();
        assert!(matches!(
            repo.add(new_user("u1")),
            Err(AppError::Duplicate(_))
        ));
        assert_eq!(repo.all().len(), 1);
    }

    #[test]
    fn update_moves_user_to_a_free_id() {
        let mut repo = empty_repo();
        repo.add(new_user("u1")).unwrap();
        repo.add(new_user("u2")).unwrap();

        assert!(matches!(
            repo.update(
                "u1",
                UserPatch {
                    user_id: Some("u2".to_string()),
                    ..Default::default()
                },
            ),
            Err(AppError::Duplicate(_))
        ));

        repo.update(
            "u1",
            UserPatch {
                user_id: Some("u3".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
        assert!(repo.find_by_id("u3").is_some());
        assert!(repo.find_by_id("u1").is_none());
    }

    #[test]
    fn delete_then_lookup_is_not_found() {
        let mut repo = empty_repo();
        repo.add(new_user("u1")).unwrap();
        repo.delete("u1").unwrap();
        assert!(repo.find_by_id("u1").is_none());
    }

    #[test]
    fn search_matches_name_case_insensitively_and_id_exactly() {
        let mut repo = empty_repo();
        repo.add(NewUser {
            name: "Ada Lovelace".to_string(),
            user_id: "u1".to_string(),
        })
        .unwrap();
        repo.add(NewUser {
            name: "Alan Turing".to_string(),
            user_id: "U2".to_string(),
        })
        .unwrap();

        assert_eq!(repo.search("lovelace").len(), 1);
        assert_eq!(repo.search("a").len(), 2);
        // ID matching is case-sensitive
        assert_eq!(repo.search("u2").len(), 0);
        assert_eq!(repo.search("U2").len(), 1);
    }
}
