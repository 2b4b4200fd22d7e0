mod loader;
mod salon_data;

pub use loader::{load_salon_data, load_salon_data_from_path, parse_salon_data, salon_data_path};
pub use salon_data::SalonDataFile;

#[cfg(test)]
mod tests {
    use super::{load_salon_data, load_salon_data_from_path, parse_salon_data};

    #[test]
    fn bundled_salon_data_loads_and_validates() {
        let data = load_salon_data().expect("bundled salon data should load");

        assert_eq!(data.tiers.len(), 4);
        assert!(
            !data.celebrities.is_empty(),
            "salon_data.json should include at least one celebrity"
        );

        let table = data.tier_table();
        assert_eq!(table.get(2).map(|tier| tier.cost), Some(15_000_000));
        assert_eq!(table.get(4).map(|tier| tier.capacity), Some(12));
        assert_eq!(data.catalog().len(), data.celebrities.len());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_salon_data_from_path("does/not/exist.json")
            .expect_err("missing file should fail");

        assert!(format!("{err:#}").contains("does/not/exist.json"));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(parse_salon_data("{ \"tiers\": [").is_err());
    }

    #[test]
    fn rejects_broken_ladders() {
        let cases = [
            (r#"{ "tiers": [] }"#, "no tiers"),
            (
                r#"{ "tiers": [{ "level": 2, "capacity": 3, "cost": 0 }] }"#,
                "expected 1",
            ),
            (
                r#"{ "tiers": [{ "level": 1, "capacity": 3, "cost": 10 }] }"#,
                "must be free",
            ),
            (
                r#"{ "tiers": [{ "level": 1, "capacity": 3, "cost": 0, "prerequisite_level": 1 }] }"#,
                "no prerequisite",
            ),
            (
                r#"{ "tiers": [{ "level": 1, "capacity": 0, "cost": 0 }] }"#,
                "zero capacity",
            ),
            (
                r#"{ "tiers": [
                    { "level": 1, "capacity": 3, "cost": 0 },
                    { "level": 2, "capacity": 5, "cost": 10, "prerequisite_level": 0 }
                ] }"#,
                "requires tier 0",
            ),
        ];

        for (json, needle) in cases {
            let err = parse_salon_data(json).expect_err("ladder should be rejected");
            assert!(
                format!("{err:#}").contains(needle),
                "expected '{needle}' in '{err:#}'"
            );
        }
    }

    #[test]
    fn rejects_duplicate_celebrity_ids() {
        let json = r#"{
            "tiers": [{ "level": 1, "capacity": 3, "cost": 0 }],
            "celebrities": [
                { "id": "celeb-1", "price": 10 },
                { "id": "celeb-1", "price": 20 }
            ]
        }"#;

        let err = parse_salon_data(json).expect_err("duplicate ids should be rejected");
        assert!(format!("{err:#}").contains("duplicate celebrity id: celeb-1"));
    }

    #[test]
    fn rejects_blank_celebrity_ids() {
        let json = r#"{
            "tiers": [{ "level": 1, "capacity": 3, "cost": 0 }],
            "celebrities": [{ "id": "  ", "price": 1 }]
        }"#;

        let err = parse_salon_data(json).expect_err("blank id should be rejected");
        assert!(format!("{err:#}").contains("celebrity with empty id"));
    }
}
