use std::fmt::Display;
use std::io::{self, Write};

/// Renders a sequence as `[a, b, c]`; an empty one is `[]`.
pub fn format_sequence<T>(arr: &[T]) -> String
where
    T: Display
{
    let items: Vec<String> = arr.iter().map(|item| item.to_string()).collect();
    format!("[{}]", items.join(", "))
}

pub fn write_sequence<T, W>(out: &mut W, arr: &[T]) -> io::Result<()>
where
    T: Display,
    W: Write
{
    writeln!(out, "{}", format_sequence(arr))
}
