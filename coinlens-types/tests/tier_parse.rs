use coinlens_types::{CoinlensError, Tier};

#[test]
fn wire_codes_parse_and_display() {
    for tier in Tier::ALL {
        let parsed: Tier = tier.as_str().parse().expect("parse wire code");
        assert_eq!(parsed, tier);
        assert_eq!(tier.to_string(), tier.as_str());
    }
}

#[test]
fn parsing_trims_and_ignores_case() {
    assert_eq!(" 30D ".parse::<Tier>().expect("parse"), Tier::Medium);
    assert_eq!("6M".parse::<Tier>().expect("parse"), Tier::Long);
}

#[test]
fn unknown_code_is_invalid_arg() {
    let err = "2w".parse::<Tier>().unwrap_err();
    assert!(matches!(err, CoinlensError::InvalidArg(_)));
}

#[test]
fn serde_uses_wire_codes() {
    let json = serde_json::to_string(&Tier::ALL).expect("serialize tiers");
    assert_eq!(json, r#"["7d","30d","6m","1y"]"#);
    let back: Vec<Tier> = serde_json::from_str(&json).expect("deserialize tiers");
    assert_eq!(back, Tier::ALL.to_vec());
}

#[test]
fn monthly_tiers_are_the_long_windows() {
    assert!(!Tier::Short.is_monthly());
    assert!(!Tier::Medium.is_monthly());
    assert!(Tier::Long.is_monthly());
    assert!(Tier::Extended.is_monthly());
    assert_eq!(Tier::default(), Tier::Short);
    assert_eq!(Tier::Long.title(), "6-Month");
}
