use crate::util::Stack;

fn positions(items: &[usize]) -> Stack<usize> {
    let mut stack = Stack::with_capacity(items.len());
    for item in items {
        stack.push(*item);
    }
    stack
}

#[test]
fn push_then_pop_in_reverse_order() {
    let mut stack = positions(&[0, 4, 9]);
    assert_eq!(stack.len(), 3);
    assert_eq!(stack.pop(), Some(9));
    assert_eq!(stack.pop(), Some(4));
    assert_eq!(stack.pop(), Some(0));
    assert_eq!(stack.pop(), None);
    assert_eq!(stack.len(), 0);
}

#[test]
fn peek_leaves_top_in_place() {
    let mut stack = positions(&[]);
    assert_eq!(stack.peek(), None);
    stack.push(3);
    stack.push(7);
    assert_eq!(stack.peek(), Some(&7));
    assert_eq!(stack.len(), 2);
}

#[test]
fn display_bottom_to_top() {
    assert_eq!(positions(&[]).to_string(), "[]");
    assert_eq!(positions(&[0, 4, 9]).to_string(), "[0, 4, 9]");
}
