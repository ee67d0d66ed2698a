use crate::domain::stats::{average_remaining, format_average_message, performance, rank_descending};

#[test]
fn average_over_in_progress_games() {
    assert_eq!(average_remaining(&[]), None);
    assert_eq!(average_remaining(&[4, 3, 2]), Some(3.0));
    let avg = average_remaining(&[5, 4]).unwrap();
    assert_eq!(format_average_message(avg), "The average moves remaining is 4.50");
}

#[test]
fn average_message_rounds_to_two_places() {
    let avg = average_remaining(&[1, 1, 2]).unwrap();
    assert_eq!(format_average_message(avg), "The average moves remaining is 1.33");
}

#[test]
fn performance_is_float_mean() {
    assert_eq!(performance(&[]), 0.0);
    assert_eq!(performance(&[15, 16]), 15.5);
    assert_eq!(performance(&[10]), 10.0);
}

#[test]
fn ranking_is_descending() {
    let mut users = vec![("a", 1.0), ("b", 15.5), ("c", 0.0), ("d", 7.25)];
    rank_descending(&mut users, |u| u.1);
    let names: Vec<&str> = users.iter().map(|u| u.0).collect();
    assert_eq!(names, ["b", "d", "a", "c"]);
}
