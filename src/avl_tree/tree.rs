use crate::avl_tree::node::Node;
use crate::entry::Entry;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T, U> = Option<Box<Node<T, U>>>;

pub fn height<T, U>(tree: &Tree<T, U>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

// precondition: `node.right` is present
fn rotate_left<T, U>(mut node: Box<Node<T, U>>) -> Box<Node<T, U>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update_height();
    child.left = Some(node);
    child.update_height();
    child
}

// precondition: `node.left` is present
fn rotate_right<T, U>(mut node: Box<Node<T, U>>) -> Box<Node<T, U>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update_height();
    child.right = Some(node);
    child.update_height();
    child
}

// Restores the height invariant at the root of `tree`, assuming both subtrees already satisfy
// it and their heights differ from the root's cached height by at most one. The taller child's
// balance factor picks between the single and double rotation, which covers both the insert
// and the remove unwind.
fn rebalance<T, U>(tree: &mut Tree<T, U>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update_height();

    if node.balance_factor() > 1 {
        if let Some(child) = node.left.take() {
            if child.balance_factor() < 0 {
                node.left = Some(rotate_left(child));
            } else {
                node.left = Some(child);
            }
        }
        node = rotate_right(node);
    } else if node.balance_factor() < -1 {
        if let Some(child) = node.right.take() {
            if child.balance_factor() > 0 {
                node.right = Some(rotate_right(child));
            } else {
                node.right = Some(child);
            }
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

// precondition: there exists a minimum node in the tree
//
// Rebalances every frame on the way back up; a removal may shrink the height of each subtree
// along the left spine.
fn remove_min<T, U>(tree: &mut Tree<T, U>) -> Box<Node<T, U>> {
    let has_left = match tree {
        Some(ref node) => node.left.is_some(),
        None => unreachable!(),
    };

    if has_left {
        let min = match tree {
            Some(ref mut node) => remove_min(&mut node.left),
            None => unreachable!(),
        };
        rebalance(tree);
        min
    } else {
        match tree.take() {
            Some(mut node) => {
                *tree = node.right.take();
                node
            },
            None => unreachable!(),
        }
    }
}

pub fn insert<T, U>(tree: &mut Tree<T, U>, new_node: Node<T, U>) -> Option<Entry<T, U>>
where
    T: Ord,
{
    let rejected = match tree {
        Some(ref mut node) => match new_node.entry.key.cmp(&node.entry.key) {
            Ordering::Less => insert(&mut node.left, new_node),
            Ordering::Greater => insert(&mut node.right, new_node),
            // equal keys are rejected, not merged; hand the new entry back untouched
            Ordering::Equal => return Some(new_node.entry),
        },
        None => {
            *tree = Some(Box::new(new_node));
            return None;
        },
    };

    if rejected.is_none() {
        rebalance(tree);
    }
    rejected
}

pub fn remove<T, U, V>(tree: &mut Tree<T, U>, key: &V) -> Option<Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let removed = match tree.take() {
        Some(mut node) => match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => {
                let removed = remove(&mut node.left, key);
                *tree = Some(node);
                removed
            },
            Ordering::Greater => {
                let removed = remove(&mut node.right, key);
                *tree = Some(node);
                removed
            },
            Ordering::Equal => {
                if node.left.is_some() && node.right.is_some() {
                    // two children: the in-order successor replaces this node's entry and its
                    // old node is destroyed where the minimum was spliced out
                    let successor = *remove_min(&mut node.right);
                    let entry = mem::replace(&mut node.entry, successor.entry);
                    *tree = Some(node);
                    Some(entry)
                } else {
                    let Node { entry, left, right, .. } = *node;
                    *tree = if left.is_some() { left } else { right };
                    Some(entry)
                }
            },
        },
        None => return None,
    };

    if removed.is_some() {
        rebalance(tree);
    }
    removed
}

pub fn get<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| match key.cmp(node.entry.key.borrow()) {
        Ordering::Less => get(&node.left, key),
        Ordering::Greater => get(&node.right, key),
        Ordering::Equal => Some(&node.entry),
    })
}

pub fn get_mut<'a, T, U, V>(tree: &'a mut Tree<T, U>, key: &V) -> Option<&'a mut Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_mut().and_then(|node| match key.cmp(node.entry.key.borrow()) {
        Ordering::Less => get_mut(&mut node.left, key),
        Ordering::Greater => get_mut(&mut node.right, key),
        Ordering::Equal => Some(&mut node.entry),
    })
}

pub fn ceil<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| match key.cmp(node.entry.key.borrow()) {
        Ordering::Greater => ceil(&node.right, key),
        Ordering::Less => match ceil(&node.left, key) {
            None => Some(&node.entry),
            res => res,
        },
        Ordering::Equal => Some(&node.entry),
    })
}

pub fn floor<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| match key.cmp(node.entry.key.borrow()) {
        Ordering::Less => floor(&node.left, key),
        Ordering::Greater => match floor(&node.right, key) {
            None => Some(&node.entry),
            res => res,
        },
        Ordering::Equal => Some(&node.entry),
    })
}

pub fn min<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        Some(&curr.entry)
    })
}

pub fn max<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        Some(&curr.entry)
    })
}
