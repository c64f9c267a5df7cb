use serde::Deserialize;

/// A repository entry from the `/users/{username}/repos` API.
///
/// Only the name is needed; every other field of the payload is ignored.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// Repository name, without the owner prefix
    pub name: String,
}
