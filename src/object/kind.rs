use crate::{Error, Result};

/// Represents the different type of objects there can be: Blobs, Trees and Commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Blob,
    Tree,
    Commit,
}

impl ObjectKind {
    const BLOB_STRING: &'static str = "blob";
    const TREE_STRING: &'static str = "tree";
    const COMMIT_STRING: &'static str = "commit";

    /// Maps a tree entry mode to the kind of object the entry points to.
    ///
    /// Regular files, executables and symlinks are blobs, directories are
    /// trees and submodule gitlinks are commits.
    ///
    /// # Errors
    ///
    /// This function will fail with `Error::UnrecognizedMode` for any mode
    /// outside the fixed table, instead of guessing a kind.
    pub fn from_tree_mode(mode: &str) -> Result<Self> {
        match mode {
            "100644" | "100755" | "120000" => Ok(ObjectKind::Blob),
            // trees are usually serialized without the leading zero
            "40000" | "040000" => Ok(ObjectKind::Tree),
            "160000" => Ok(ObjectKind::Commit),
            _ => Err(Error::UnrecognizedMode(mode.into())),
        }
    }
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Blob => ObjectKind::BLOB_STRING,
            Self::Tree => ObjectKind::TREE_STRING,
            Self::Commit => ObjectKind::COMMIT_STRING,
        })
    }
}

impl TryFrom<&str> for ObjectKind {
    type Error = crate::Error;

    fn try_from(value: &str) -> Result<Self> {
        match value {
            ObjectKind::BLOB_STRING => Ok(ObjectKind::Blob),
            ObjectKind::TREE_STRING => Ok(ObjectKind::Tree),
            ObjectKind::COMMIT_STRING => Ok(ObjectKind::Commit),
            _ => Err(Error::CorruptObject(format!(
                "object kind {value:?} is not valid"
            ))),
        }
    }
}

// Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_mapping_for_blobs() {
        for mode in ["100644", "100755", "120000"] {
            assert_eq!(ObjectKind::Blob, ObjectKind::from_tree_mode(mode).unwrap());
        }
    }

    #[test]
    fn test_mode_mapping_for_trees() {
        assert_eq!(ObjectKind::Tree, ObjectKind::from_tree_mode("40000").unwrap());
        assert_eq!(ObjectKind::Tree, ObjectKind::from_tree_mode("040000").unwrap());
    }

    #[test]
    fn test_mode_mapping_for_gitlinks() {
        assert_eq!(
            ObjectKind::Commit,
            ObjectKind::from_tree_mode("160000").unwrap()
        );
    }

    #[test]
    fn test_unrecognized_mode_is_an_error() {
        let result = ObjectKind::from_tree_mode("999999");
        assert!(matches!(result, Err(Error::UnrecognizedMode(_))));

        assert!(ObjectKind::from_tree_mode("").is_err());
    }

    #[test]
    fn test_kind_from_tag() {
        assert_eq!(ObjectKind::Blob, ObjectKind::try_from("blob").unwrap());
        assert_eq!(ObjectKind::Tree, ObjectKind::try_from("tree").unwrap());
        assert_eq!(ObjectKind::Commit, ObjectKind::try_from("commit").unwrap());
        assert!(ObjectKind::try_from("blobby").is_err());
    }
}
