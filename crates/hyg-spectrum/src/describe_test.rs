use crate::describe::describe;
use crate::parser::parse;
use crate::record::StarRecord;
use crate::resolver::fill_forward;

fn describe_all(spect: &str, record: &StarRecord) -> Vec<String> {
    let mut components = parse(spect);
    fill_forward(&mut components, |_| None);
    components
        .iter()
        .map(|component| describe(record, component))
        .collect()
}

#[test]
fn luminosity_phrase_replaces_star() {
    let record = StarRecord::default();
    assert_eq!(describe_all("G2V", &record), vec!["Type G2V, yellow main-sequence dwarf"]);
    assert_eq!(describe_all("B8Ia+", &record), vec!["Type B8Ia+, blue-white hypergiant"]);
    assert_eq!(describe_all("C5II", &record), vec!["Type C5II, carbon bright giant"]);
}

#[test]
fn type_text_without_luminosity() {
    let record = StarRecord::default();
    assert_eq!(describe_all("K3", &record), vec!["Type K3, orange star"]);
    assert_eq!(describe_all("DA3", &record), vec!["Type DA3, hydrogen-rich white dwarf"]);
}

#[test]
fn intermediate_fragment() {
    let texts = describe_all("G8III-K0", &StarRecord::default());
    assert_eq!(texts[0], "Type G8III, yellow giant");
    assert_eq!(texts[1], ", intermediate with orange K0 giant");
}

#[test]
fn composite_fragment() {
    let texts = describe_all("A5/8II", &StarRecord::default());
    assert_eq!(texts[0], "Type A5II, white bright giant");
    assert_eq!(
        texts[1],
        ", composite with white A8 bright giant, (possible spectroscopic double or multiple star)"
    );
}

#[test]
fn modifiers_follow_in_order() {
    let texts = describe_all("B2IVne", &StarRecord::default());
    assert_eq!(
        texts[0],
        "Type B2IV, blue-white subgiant, emission lines present, broad absorption lines from fast rotation"
    );
}

#[test]
fn inferred_primary_is_flagged() {
    let computed = StarRecord {
        computed: true,
        ..StarRecord::default()
    };
    assert_eq!(
        describe_all("K0III", &computed),
        vec!["Type K0III, orange giant, estimated from catalog photometry"]
    );

    let guess = StarRecord {
        computed: true,
        guess: true,
        ..StarRecord::default()
    };
    assert_eq!(
        describe_all("G5V", &guess),
        vec!["Type G5V, yellow main-sequence dwarf, spectrum assumed"]
    );
}

#[test]
fn unclassified() {
    assert_eq!(describe_all("", &StarRecord::default()), vec!["Unclassified spectrum"]);
}
