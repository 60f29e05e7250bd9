use rand::Rng;

/// Prefix for every patch-test reference id.
pub const REFERENCE_PREFIX: &str = "RSKN-PT";

const BASE36: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generate a reference id of the form `RSKN-PT-YYYYMMDD-XXXX`: the local
/// assembly date plus four random uppercase base36 characters. The id is a
/// human-readable correlation key, not a store key, so same-day
/// collisions are tolerated.
pub fn generate_reference_id() -> String {
    let date = jiff::Zoned::now().date();
    let mut rng = rand::thread_rng();
    let suffix: String = (0..4)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("{REFERENCE_PREFIX}-{}-{suffix}", date.strftime("%Y%m%d"))
}

/// The display timestamp stamped onto a record at assembly: en-GB long
/// form, e.g. "Thursday 06 August 2026 at 14:03:22 BST".
pub(crate) fn display_timestamp() -> String {
    jiff::Zoned::now()
        .strftime("%A %d %B %Y at %H:%M:%S %Z")
        .to_string()
}
