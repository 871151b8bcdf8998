// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural properties of tree layouts over random search trees.

use proptest::prelude::*;
use understory_graph::{BinaryTree, FixedAdvanceMeasure, Font, LabeledNode, NodeId};
use understory_graph_view::Canvas;
use understory_tree_layout::TreeLayout;

/// Insert `keys` into a binary search tree, skipping duplicates.
fn search_tree(keys: &[u32]) -> BinaryTree {
    let measure = FixedAdvanceMeasure::default();
    let font = Font::default();
    let mut tree = BinaryTree::new();
    let mut key_of = std::collections::HashMap::<NodeId, u32>::new();

    for &key in keys {
        let Some(mut current) = tree.root() else {
            let id = tree.insert(LabeledNode::new(key.to_string(), &measure, &font));
            tree.set_root(Some(id)).unwrap();
            key_of.insert(id, key);
            continue;
        };
        loop {
            let here = key_of[&current];
            if key == here {
                break;
            }
            let next = if key < here {
                tree.left_of(current)
            } else {
                tree.right_of(current)
            };
            if let Some(next) = next {
                current = next;
                continue;
            }
            let id = tree.insert(LabeledNode::new(key.to_string(), &measure, &font));
            key_of.insert(id, key);
            if key < here {
                tree.set_left(current, Some(id)).unwrap();
            } else {
                tree.set_right(current, Some(id)).unwrap();
            }
            break;
        }
    }
    tree
}

proptest! {
    /// No two nodes share any horizontal pixel column.
    #[test]
    fn node_columns_never_overlap(keys in prop::collection::vec(0_u32..1000, 0..64)) {
        let mut tree = search_tree(&keys);
        let mut canvas = Canvas::new(800, 600);
        let stats = TreeLayout::default().layout(&mut tree, &mut canvas);

        if tree.is_empty() {
            prop_assert!(stats.is_none());
            return Ok(());
        }
        let stats = stats.unwrap();
        prop_assert_eq!(stats.nodes, tree.len());

        let spans: Vec<(i32, i32)> = tree
            .iter()
            .map(|(_, n)| (n.position.x, n.position.x + n.graphical_size().width))
            .collect();
        for (i, a) in spans.iter().enumerate() {
            prop_assert!(a.0 >= 0 && a.1 <= stats.width);
            for b in &spans[i + 1..] {
                prop_assert!(a.1 <= b.0 || b.1 <= a.0, "{a:?} overlaps {b:?}");
            }
        }
    }

    /// The canvas lists exactly the tree, in pre-order, with one edge per child.
    #[test]
    fn canvas_mirrors_the_tree(keys in prop::collection::vec(0_u32..1000, 1..64)) {
        let mut tree = search_tree(&keys);
        let mut canvas = Canvas::new(640, 480);
        TreeLayout::default().layout(&mut tree, &mut canvas).unwrap();

        let pre_order: Vec<NodeId> = tree.pre_order().collect();
        prop_assert_eq!(canvas.nodes(), pre_order.as_slice());
        prop_assert_eq!(canvas.edges().len(), tree.len() - 1);
        for &(parent, child) in canvas.edges() {
            prop_assert_eq!(tree.parent_of(child), Some(parent));
            let (p, c) = (tree.get(parent).unwrap(), tree.get(child).unwrap());
            prop_assert!(c.position.y > p.position.y);
        }

        let root = tree.get(tree.root().unwrap()).unwrap();
        let offset = canvas.content_offset();
        prop_assert_eq!(offset.x, 320 - root.position.x);
        prop_assert_eq!(offset.y, 240 - root.position.y);
    }
}
