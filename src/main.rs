extern crate balanced_collections;

use balanced_collections::avl_tree::AvlMap;

#[derive(Debug)]
struct Record {
    age: u32,
    weight: f64,
}

fn main() {
    let mut roster = AvlMap::new();

    let records = vec![
        ("isabel", Record { age: 30, weight: 62.4 }),
        ("otto", Record { age: 41, weight: 83.0 }),
        ("petra", Record { age: 25, weight: 57.9 }),
        ("dmitri", Record { age: 57, weight: 91.2 }),
        ("lena", Record { age: 34, weight: 66.1 }),
        ("otto", Record { age: 19, weight: 72.5 }),
    ];

    for (name, record) in records {
        if roster.insert(name.to_string(), record).is_err() {
            println!("'{}' is already registered, skipping", name);
        }
    }

    println!(
        "{} people registered, tree height {}",
        roster.len(),
        roster.height(),
    );

    match roster.remove("dmitri") {
        Ok((name, record)) => println!("removed {} ({:?})", name, record),
        Err(err) => println!("remove failed: {}", err),
    }

    if let Some(record) = roster.get("petra") {
        println!("petra is registered with {:?}", record);
    }

    for (name, record) in &roster {
        println!("{:8} age {:2} weight {:5.1}", name, record.age, record.weight);
    }
}
