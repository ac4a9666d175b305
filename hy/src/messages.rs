//! Reply texts

use crate::task::Task;

pub const GREETING: &str = "Hello! I'm Hyperion\nWhat can I do for you?";
pub const FAREWELL: &str = "Bye. Hope to see you again soon!";
pub const FIND_BANNER: &str = "Here are the matching tasks in your list:";

pub fn added(task: &Task, count: usize) -> String {
    format!("Got it. I've added this task:\n  {}\n{}", task, count_line(count))
}

pub fn removed(task: &Task, count: usize) -> String {
    format!("Noted. I've removed this task:\n  {}\n{}", task, count_line(count))
}

pub fn marked(task: &Task) -> String {
    format!("Nice! I've marked this task as done:\n  {}", task)
}

pub fn unmarked(task: &Task) -> String {
    format!("OK, I've marked this task as not done yet:\n  {}", task)
}

pub fn found(list: &str) -> String {
    format!("{}\n{}", FIND_BANNER, list)
}

pub fn save_failed(reason: &str) -> String {
    format!("(changes were not saved: {})", reason)
}

fn count_line(count: usize) -> String {
    let noun = if count == 1 { "task" } else { "tasks" };
    format!("Now you have {} {} in the list.", count, noun)
}
