use levenshtein::{CostTable, EditPath};
use levenshtein::cs::string::SequenceView;

const TARGETS: [&str; 7] = ["apple", "papple", "appled", "appdle", "apdle", "aplep", "xxxxx"];

fn main() -> levenshtein::Result<()> {
    let source: Vec<char> = "apple".chars().collect();

    for target in TARGETS {
        let target_chars: Vec<char> = target.chars().collect();
        let (s, t) = (SequenceView::new(&source), SequenceView::new(&target_chars));

        let table = CostTable::build(s, t)?;
        let path = EditPath::reconstruct(&table, s, t)?;

        println!("Path from apple to {}", target);
        print!("{}", table);
        println!("{}", path);
        println!("Distance: {}", table.distance());
        println!();
    }

    Ok(())
}
