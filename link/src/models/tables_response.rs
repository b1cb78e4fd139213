use serde::{Deserialize, Serialize};

use super::table::Table;

/// Response envelope of `GET /db`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TablesResponse {
    /// All tables known to the backend
    pub tables: Vec<Table>,
}
