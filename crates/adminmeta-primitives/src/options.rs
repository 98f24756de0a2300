use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};

///
/// DeleteOption
///
/// What happens to dependent records when the owning record is deleted.
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, FromStr, Hash, PartialEq, Serialize,
)]
#[remain::sorted]
pub enum DeleteOption {
    #[default]
    AskUser,
    CascadeDelete,
    Nothing,
    SetNull,
}

///
/// FileNameOption
///
/// How an uploaded file is named when stored.
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, FromStr, Hash, PartialEq, Serialize,
)]
#[remain::sorted]
pub enum FileNameOption {
    Guid,
    #[default]
    OriginalFileName,
    Timestamp,
    UserInput,
}

///
/// TESTS
///
