use int_list::{List, NOT_FOUND, State};

fn values(list: &List) -> Vec<i32> {
    list.iter().copied().collect()
}

#[test]
fn test_walkthrough() {
    let mut list = List::new();
    list.insert_at_beginning(1);
    list.insert_at_beginning(2);
    list.insert_at_end(3);
    list.insert_at_end(4);
    list.insert_at_index(5, 2);
    assert_eq!(list.to_string(), "2 1 5 3 4");

    assert_eq!(list.find_first_occurrence(3), 3);

    list.sort_list();
    assert_eq!(list.to_string(), "1 2 3 4 5");

    list.delete_at_beginning();
    list.delete_at_end();
    assert_eq!(list.to_string(), "2 3 4");

    assert_eq!(list.interior().delete_at_index(1), Some(3));
    assert_eq!(list.to_string(), "2 4");

    assert_eq!(list.interior().delete_at_index(0), None);
    assert_eq!(list.to_string(), "2 4");

    list.delete_list();
    assert_eq!(list.state(), State::Empty);
}

#[test]
fn test_head_delete_needs_owner() {
    let mut list: List = "8 9".parse().unwrap();

    // the interior handle cannot reseat the head
    list.interior().delete_at_index(0);
    assert_eq!(values(&list), vec![8, 9]);

    // the owner can
    assert_eq!(list.delete_at_beginning(), Some(8));
    assert_eq!(values(&list), vec![9]);
}

#[test]
fn test_empty_list_noops() {
    let mut list = List::new();
    assert_eq!(list.delete_at_beginning(), None);
    assert_eq!(list.delete_at_end(), None);
    for index in [-1, 0, 1, 100] {
        assert_eq!(list.interior().delete_at_index(index), None);
    }
    assert!(list.is_empty());
    assert_eq!(list.find_first_occurrence(1), NOT_FOUND);
}

#[test]
fn test_clamped_insert_matches_append() {
    let mut clamped: List = "1 2 3".parse().unwrap();
    let mut appended = clamped.clone();

    clamped.insert_at_index(7, 1000);
    appended.insert_at_end(7);
    assert_eq!(clamped, appended);
}

#[test]
fn test_shared_behind_lock() {
    use std::sync::{Arc, Mutex};
    use std::thread;

    let list = Arc::new(Mutex::new(List::new()));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let list = Arc::clone(&list);
            thread::spawn(move || {
                for j in 0..25 {
                    list.lock().unwrap().insert_at_end(i * 100 + j);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let mut list = list.lock().unwrap();
    assert_eq!(list.len(), 100);
    list.sort_list();
    let sorted = values(&list);
    assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
}
