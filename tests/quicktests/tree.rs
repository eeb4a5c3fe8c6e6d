use search_tree::{Node, Tree, TreeError};

use std::collections::{BTreeSet, HashSet};

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        xs.iter().all(|x| tree.find(x).map(Node::value) == Some(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.find(x).is_none() && tree.find_recursively(x).is_none())
    }
}

quickcheck::quickcheck! {
    fn in_order_is_sorted(xs: Vec<i32>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let sorted: BTreeSet<_> = xs.iter().collect();

        tree.dfs_in_order().into_iter().eq(sorted.into_iter())
    }
}

quickcheck::quickcheck! {
    fn duplicate_insert_changes_nothing(xs: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        let before: Vec<i8> = tree.dfs_in_order().into_iter().copied().collect();
        let shape: Vec<i8> = tree.bfs().into_iter().copied().collect();

        tree.extend(xs.iter().copied());

        tree.dfs_in_order().into_iter().eq(before.iter())
            && tree.bfs().into_iter().eq(shape.iter())
    }
}

quickcheck::quickcheck! {
    fn bfs_covers_every_value(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let distinct: HashSet<_> = xs.iter().collect();
        let bfs = tree.bfs();

        bfs.len() == distinct.len() && bfs.first() == xs.first().as_ref()
    }
}

quickcheck::quickcheck! {
    fn recursive_and_iterative_inserts_agree(xs: Vec<i8>) -> bool {
        let mut iterative = Tree::new();
        let mut recursive = Tree::new();
        for x in &xs {
            iterative.insert(*x);
            recursive.insert_recursively(*x);
        }

        iterative == recursive
    }
}

quickcheck::quickcheck! {
    fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        let mut still_present: BTreeSet<_> = xs.iter().copied().collect();

        for remove in &removes {
            let expected = if still_present.is_empty() {
                Err(TreeError::Empty)
            } else if still_present.remove(remove) {
                Ok(*remove)
            } else {
                Err(TreeError::NotFound)
            };
            if tree.remove(remove) != expected {
                return false;
            }
        }

        removes.iter().all(|x| tree.find(x).is_none())
            && still_present.iter().all(|x| tree.find(x).is_some())
            && tree.dfs_in_order().into_iter().eq(still_present.iter())
    }
}
