use crate::{LazyOps, LazySegTree, Query, QueryTree, RangeAddTree};
use serde::{de::DeserializeOwned, Serialize};
use std::path::Path;

// a snapshot can decode cleanly and still describe a tree that would index
// out of bounds on the first update or query
fn check_layout(well_formed: bool, path: &Path) -> Result<(), file_io::Error> {
    if well_formed {
        Ok(())
    } else {
        Err(file_io::Error::Corrupt(format!(
            "{}: node arrays do not match the leaf count",
            path.display()
        )))
    }
}

impl<O> LazySegTree<O>
where
    O: LazyOps + Serialize,
    O::Value: Serialize,
    O::Lazy: Serialize,
{
    /// Writes the tree, pending updates included, to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), file_io::Error> {
        file_io::save_snapshot(path, self)
    }
}

impl<O> LazySegTree<O>
where
    O: LazyOps + DeserializeOwned,
    O::Value: DeserializeOwned,
    O::Lazy: DeserializeOwned,
{
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, file_io::Error> {
        let path = path.as_ref();
        let lazy_tree: Self = file_io::load_snapshot(path)?;
        check_layout(lazy_tree.is_well_formed(), path)?;
        Ok(lazy_tree)
    }
}

impl<V: Serialize, Q: Query<V>> QueryTree<V, Q> {
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), file_io::Error> {
        file_io::save_snapshot(path, self)
    }
}

impl<V: DeserializeOwned, Q: Query<V>> QueryTree<V, Q> {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, file_io::Error> {
        let path = path.as_ref();
        let query_tree: Self = file_io::load_snapshot(path)?;
        check_layout(query_tree.is_well_formed(), path)?;
        Ok(query_tree)
    }
}

impl<V: Serialize> RangeAddTree<V> {
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), file_io::Error> {
        file_io::save_snapshot(path, self)
    }
}

impl<V: DeserializeOwned> RangeAddTree<V> {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, file_io::Error> {
        let path = path.as_ref();
        let range_add: Self = file_io::load_snapshot(path)?;
        check_layout(range_add.is_well_formed(), path)?;
        Ok(range_add)
    }
}
