/// Ports module defining interfaces for hexagonal architecture
///
/// This module contains both inbound ports (driving ports - use case
/// interfaces) and outbound ports (driven ports - infrastructure interfaces).
pub mod inbound;
pub mod outbound;
