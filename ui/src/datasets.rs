//! Built-in sample datasets shown by the app.
//!
//! The rows are generated deterministically so that tests can rely on them.

use roost_business::{Row, RowSet};
use serde_json::json;

const BREEDS: [&str; 4] = ["Ross 308", "Cobb 500", "Hy-Line Brown", "Lohmann White"];
const STATUSES: [&str; 3] = ["growing", "laying", "sold"];

/// Number of rows in [`batches`].
pub const BATCH_COUNT: usize = 23;

/// Flock batches, keyed by `id`.
pub fn batches() -> RowSet {
    (1..=BATCH_COUNT)
        .map(|i| {
            Row::from_value(json!({
                "id": format!("B-{i:03}"),
                "breed": BREEDS[i % BREEDS.len()],
                "house": format!("H{}", (i % 5) + 1),
                "placed": format!("2024-{:02}-{:02}", (i % 12) + 1, (i * 7) % 28 + 1),
                "birds": 500 + (i * 37) % 400,
                "mortality": (i * 3) % 11,
                "status": STATUSES[i % STATUSES.len()],
            }))
        })
        .collect()
}

/// Feed and supplies stock. The supplier is a nested object.
pub fn inventory() -> RowSet {
    [
        ("I-01", "Starter crumble", "feed", 1200.0, "kg", "Greenfield Mills", "+1 555 0101"),
        ("I-02", "Grower pellets", "feed", 3400.0, "kg", "Greenfield Mills", "+1 555 0101"),
        ("I-03", "Layer mash", "feed", 2750.5, "kg", "Valley Feeds", "+1 555 0199"),
        ("I-04", "Oyster grit", "supplement", 310.0, "kg", "Valley Feeds", "+1 555 0199"),
        ("I-05", "Newcastle vaccine", "vaccine", 40.0, "vials", "AgriVet", "+1 555 0142"),
        ("I-06", "Gumboro vaccine", "vaccine", 25.0, "vials", "AgriVet", "+1 555 0142"),
        ("I-07", "Wood shavings", "bedding", 180.0, "bales", "Pine Co", "+1 555 0177"),
        ("I-08", "Egg trays", "packaging", 5200.0, "pcs", "PackRight", "+1 555 0160"),
    ]
    .into_iter()
    .map(|(id, item, category, quantity, unit, supplier, phone)| {
        Row::from_value(json!({
            "id": id,
            "item": item,
            "category": category,
            "quantity": quantity,
            "unit": unit,
            "supplier": {"name": supplier, "phone": phone},
        }))
    })
    .collect()
}

/// Sales of birds and eggs.
pub fn sales() -> RowSet {
    [
        ("S-1001", "2024-05-02", "Market Hall", "eggs", 360, 126.0, true),
        ("S-1002", "2024-05-03", "Corner Deli", "eggs", 120, 44.4, false),
        ("S-1003", "2024-05-06", "Fresh Foods Ltd", "broilers", 150, 975.0, true),
        ("S-1004", "2024-05-09", "Market Hall", "eggs", 480, 168.0, true),
        ("S-1005", "2024-05-12", "Hotel Riverside", "broilers", 40, 268.0, false),
        ("S-1006", "2024-05-14", "Corner Deli", "spent hens", 60, 150.0, true),
        ("S-1007", "2024-05-20", "Fresh Foods Ltd", "eggs", 900, 306.0, false),
        ("S-1008", "2024-05-27", "Market Hall", "broilers", 75, 495.0, true),
        ("S-1009", "2024-06-01", "School Canteen", "eggs", 240, 84.0, true),
        ("S-1010", "2024-06-03", "Hotel Riverside", "eggs", 180, 63.0, false),
        ("S-1011", "2024-06-08", "Fresh Foods Ltd", "broilers", 200, 1300.0, true),
        ("S-1012", "2024-06-10", "Corner Deli", "eggs", 150, 55.5, true),
    ]
    .into_iter()
    .map(|(id, date, customer, product, quantity, total, paid)| {
        Row::from_value(json!({
            "id": id,
            "date": date,
            "customer": customer,
            "product": product,
            "quantity": quantity,
            "total": total,
            "paid": paid,
        }))
    })
    .collect()
}

/// House sensor readings. There is no `id` column, rows are keyed by position.
pub fn environment() -> RowSet {
    [
        ("H1", "08:00", 21.5, 62, 850, false),
        ("H2", "08:00", 22.1, 58, 910, false),
        ("H3", "08:00", 23.4, 55, 1020, true),
        ("H4", "08:00", 20.8, 66, 780, false),
        ("H5", "08:00", 24.0, 52, 1150, true),
        ("H1", "12:00", 24.2, 57, 930, true),
        ("H2", "12:00", 25.0, 54, 990, true),
        ("H3", "12:00", 26.1, 50, 1240, true),
        ("H4", "12:00", 23.3, 60, 880, false),
        ("H5", "12:00", 26.8, 49, 1310, true),
        ("H1", "18:00", 22.0, 61, 870, false),
    ]
    .into_iter()
    .map(|(house, time, temperature, humidity, co2, fans_on)| {
        Row::from_value(json!({
            "house": house,
            "time": time,
            "temperature": temperature,
            "humidity": humidity,
            "co2": co2,
            "fans_on": fans_on,
        }))
    })
    .collect()
}
