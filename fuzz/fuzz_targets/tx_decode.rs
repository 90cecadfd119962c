#![no_main]
use libfuzzer_sys::fuzz_target;

use quartz_ledger::codec;

fuzz_target!(|data: &[u8]| {
    // Strict decoder must never panic, and anything it accepts must
    // re-encode to the exact input bytes (canonical form).
    if let Ok(tx) = codec::decode(data) {
        let enc = codec::encode(&tx).expect("re-encode of decoded tx");
        assert_eq!(enc, data, "decode/encode not canonical");
        let tx2 = codec::decode(&enc).expect("re-decode of canonical bytes");
        assert_eq!(tx, tx2, "decode not stable");
    }
});
