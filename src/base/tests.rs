use crate::base::neterror::NetError;

#[test]
fn test_net_error_roundtrip() {
    // Standard Chromium error
    let original = NetError::NameNotResolved;
    let code = original.as_i32();
    assert_eq!(code, -105);
    let converted = NetError::from(code);
    assert!(matches!(converted, NetError::NameNotResolved));

    let invalid = NetError::AddressInvalid;
    assert_eq!(invalid.as_i32(), -108);
    assert!(matches!(
        NetError::from(invalid.as_i32()),
        NetError::AddressInvalid
    ));
}

#[test]
fn test_custom_codes() {
    let svc = NetError::ServiceNotResolved {
        service: "gopher".into(),
    };
    assert_eq!(svc.as_i32(), -10100);

    let flags = NetError::BadResolverFlags { bits: 0x400 };
    assert_eq!(flags.as_i32(), -10101);
    assert_eq!(flags.to_string(), "Unrecognized resolver flags: 0x400");
}

#[test]
fn test_unassigned_resolver_code_is_unknown() {
    // -119 (host resolver queue) has no counterpart here
    assert!(matches!(NetError::from(-119), NetError::Unknown(-119)));
    assert_eq!(NetError::from(-137).as_i32(), -137);
}

#[test]
fn test_unknown_error() {
    let err = NetError::from(-9999);
    assert!(matches!(err, NetError::Unknown(-9999)));
    assert_eq!(err.as_i32(), -9999);
}

#[test]
fn test_detailed_variant_shares_code() {
    let err = NetError::no_addresses("example.com");
    assert_eq!(err.as_i32(), NetError::NameNotResolved.as_i32());
    assert!(err.is_resolution_failure());
    assert!(!NetError::AddressInvalid.is_resolution_failure());
}

#[test]
fn test_collision_avoidance() {
    // Custom codes must stay clear of Chromium's assigned ranges
    // (net_error_list.h stops well above -1000).
    let chromium_range = -1000..=-1;

    for err in [
        NetError::ServiceNotResolved {
            service: String::new(),
        },
        NetError::BadResolverFlags { bits: 0 },
    ] {
        assert!(!chromium_range.contains(&err.as_i32()));
    }
}
