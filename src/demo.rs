use std::env;
use std::fs;

use anyhow::{bail, Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use singly_linked_list::linked_list::LinkedList;

lazy_static! {
    static ref COMMAND: Regex =
        Regex::new(r"^(insert_head|insert_tail|delete|search|display|size)(?:\s+(-?\d+))?$")
            .unwrap();
}

fn main() -> Result<()> {
    match env::args().nth(1) {
        Some(path) => run_script(&path),
        None => {
            showcase();
            Ok(())
        }
    }
}

fn showcase() {
    let mut list = LinkedList::new();
    list.insert_at_tail(1);
    list.insert_at_tail(2);
    list.insert_at_tail(3);
    list.insert_at_head(0);

    println!("{}", list.display());
    println!("{}", list.search(&2));
    list.delete(&2);
    println!("{}", list.display());
}

fn run_script(path: &str) -> Result<()> {
    let script = fs::read_to_string(path)
        .with_context(|| format!("cannot read script file {}", path))?;
    let mut list: LinkedList<i32> = LinkedList::new();

    for (idx, line) in script.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let captures = COMMAND
            .captures(line)
            .with_context(|| format!("line {}: unknown command '{}'", idx + 1, line))?;
        let value = captures
            .get(2)
            .map(|m| m.as_str().parse::<i32>())
            .transpose()
            .with_context(|| format!("line {}: bad value in '{}'", idx + 1, line))?;

        match (&captures[1], value) {
            ("insert_head", Some(value)) => list.insert_at_head(value),
            ("insert_tail", Some(value)) => list.insert_at_tail(value),
            ("delete", Some(value)) => println!("delete {}: {}", value, list.delete(&value)),
            ("search", Some(value)) => println!("search {}: {}", value, list.search(&value)),
            ("display", None) => println!("{}", list.display()),
            ("size", None) => println!("size: {}", list.size()),
            (command, None) => bail!("line {}: '{}' needs a value", idx + 1, command),
            (command, Some(_)) => bail!("line {}: '{}' takes no value", idx + 1, command),
        }
    }
    Ok(())
}
