//! Board summary served by the placeholder backend.

use serde::{Deserialize, Serialize};

/// Identifier and name of a board, as returned by the board summary endpoint.
///
/// The backend does not store boards yet; it always answers with
/// [`BoardInfo::stub`].
///
/// # Examples
///
/// ```
/// use kanban_protocol::BoardInfo;
///
/// let json = serde_json::to_string(&BoardInfo::stub()).unwrap();
/// assert_eq!(json, r#"{"id":1,"name":"My First Board"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardInfo {
    /// Numeric board id.
    pub id: u32,
    /// Board display name.
    pub name: String,
}

impl BoardInfo {
    /// The fixed summary returned by the placeholder endpoint.
    #[must_use]
    pub fn stub() -> Self {
        Self {
            id: 1,
            name: "My First Board".to_string(),
        }
    }
}
