use super::*;

fn lookup(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |key| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_owned())
}

#[test]
fn defaults_when_unset() {
    let config = ServerConfig::from_lookup(lookup(&[])).expect("defaults");
    assert_eq!(config.addr.to_string(), "0.0.0.0:3000");
}

#[test]
fn reads_host_and_port() {
    let config = ServerConfig::from_lookup(lookup(&[("HOST", "127.0.0.1"), ("PORT", " 8080 ")]))
        .expect("valid");
    assert_eq!(config.addr.to_string(), "127.0.0.1:8080");
}

#[test]
fn rejects_bad_port() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).expect_err("invalid");
    assert_eq!(err, ConfigError::InvalidPort("eighty".to_owned()));
}

#[test]
fn rejects_bad_host() {
    let err = ServerConfig::from_lookup(lookup(&[("HOST", "not a host")])).expect_err("invalid");
    assert_eq!(err, ConfigError::InvalidHost("not a host".to_owned()));
}
