// WakeWatch — Decision Core
//
// Hardware-independent logic shared by the firmware binary: the presence
// poller, the nod detector, the link message codec, and the wake-pattern
// arithmetic. Everything here builds (and is unit-tested) on the host;
// drivers and task loops live in the binary and only compile for espidf.

pub mod config;
pub mod events;
pub mod haptics;
pub mod link;
pub mod nod;
pub mod poller;
