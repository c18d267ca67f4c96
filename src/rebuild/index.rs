use ahash::AHashMap;

/// Groups flat entities by the id they point at, so children can be looked up
/// without rescanning the whole list for every node.
pub(super) struct ChildIndex<'a, T> {
    children: AHashMap<&'a str, Vec<&'a T>>,
}

impl<'a, T> ChildIndex<'a, T> {
    /// Indexes `items` by `link`, keeping list order within each group.
    pub(super) fn build(items: &'a [T], link: impl Fn(&'a T) -> &'a str) -> Self {
        let mut children: AHashMap<&'a str, Vec<&'a T>> = AHashMap::new();
        for item in items {
            children.entry(link(item)).or_default().push(item);
        }
        Self { children }
    }

    /// Stable-sorts every group by `key`.
    pub(super) fn sorted_by_key<K: Ord>(mut self, key: impl Fn(&T) -> K) -> Self {
        for group in self.children.values_mut() {
            group.sort_by_key(|item| key(*item));
        }
        self
    }

    pub(super) fn get(&self, id: &str) -> &[&'a T] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Entities with an empty link.
    pub(super) fn roots(&self) -> &[&'a T] {
        self.get("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Node {
        id: &'static str,
        parent: &'static str,
        position: usize,
    }

    #[test]
    fn test_groups_and_sorts_children() {
        let node = |id, parent, position| Node {
            id,
            parent,
            position,
        };
        let nodes = vec![
            node("root", "", 0),
            node("b", "root", 1),
            node("a", "root", 0),
        ];
        let index = ChildIndex::build(&nodes, |n| n.parent).sorted_by_key(|n| n.position);

        let roots: Vec<_> = index.roots().iter().map(|n| n.id).collect();
        assert_eq!(roots, vec!["root"]);
        let children: Vec<_> = index.get("root").iter().map(|n| n.id).collect();
        assert_eq!(children, vec!["a", "b"]);
        assert!(index.get("a").is_empty());
    }
}
