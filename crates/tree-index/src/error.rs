use crate::item::ItemId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeIndexError {
    #[error("[ItemDoesNotExist] item with ID \"{0}\" does not exist")]
    ItemDoesNotExist(ItemId),

    #[error("[ItemDuplicate] item with ID \"{0}\" already exists")]
    ItemDuplicate(ItemId),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl TreeIndexError {
    /// Returns the offending item id, if the error carries one.
    pub fn item_id(&self) -> Option<&ItemId> {
        match self {
            Self::ItemDoesNotExist(id) | Self::ItemDuplicate(id) => Some(id),
            Self::Serialization(_) => None,
        }
    }

    /// Short name of the error kind, as shown in the rendered message.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ItemDoesNotExist(_) => "ItemDoesNotExist",
            Self::ItemDuplicate(_) => "ItemDuplicate",
            Self::Serialization(_) => "Serialization",
        }
    }
}

pub type Result<T> = std::result::Result<T, TreeIndexError>;
