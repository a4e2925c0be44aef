//! Standard RDM parameter IDs (E1.20 table A-3).
//!
//! 0x8000..=0xFFDF is reserved for manufacturer-specific parameters.

// Network management
pub const DISC_UNIQUE_BRANCH: u16 = 0x0001;
pub const DISC_MUTE: u16 = 0x0002;
pub const DISC_UN_MUTE: u16 = 0x0003;
pub const PROXIED_DEVICES: u16 = 0x0010;
pub const PROXIED_DEVICE_COUNT: u16 = 0x0011;
pub const COMMS_STATUS: u16 = 0x0015;

// Status collection
pub const QUEUED_MESSAGE: u16 = 0x0020;
pub const STATUS_MESSAGES: u16 = 0x0030;
pub const STATUS_ID_DESCRIPTION: u16 = 0x0031;
pub const CLEAR_STATUS_ID: u16 = 0x0032;
pub const SUB_DEVICE_STATUS_REPORT_THRESHOLD: u16 = 0x0033;

// RDM information
pub const SUPPORTED_PARAMETERS: u16 = 0x0050;
pub const PARAMETER_DESCRIPTION: u16 = 0x0051;

// Product information
pub const DEVICE_INFO: u16 = 0x0060;
pub const PRODUCT_DETAIL_ID_LIST: u16 = 0x0070;
pub const DEVICE_MODEL_DESCRIPTION: u16 = 0x0080;
pub const MANUFACTURER_LABEL: u16 = 0x0081;
pub const DEVICE_LABEL: u16 = 0x0082;
pub const FACTORY_DEFAULTS: u16 = 0x0090;
pub const LANGUAGE_CAPABILITIES: u16 = 0x00A0;
pub const LANGUAGE: u16 = 0x00B0;
pub const SOFTWARE_VERSION_LABEL: u16 = 0x00C0;
pub const BOOT_SOFTWARE_VERSION_ID: u16 = 0x00C1;
pub const BOOT_SOFTWARE_VERSION_LABEL: u16 = 0x00C2;

// DMX512 setup
pub const DMX_PERSONALITY: u16 = 0x00E0;
pub const DMX_PERSONALITY_DESCRIPTION: u16 = 0x00E1;
pub const DMX_START_ADDRESS: u16 = 0x00F0;
pub const SLOT_INFO: u16 = 0x0120;
pub const SLOT_DESCRIPTION: u16 = 0x0121;
pub const DEFAULT_SLOT_VALUE: u16 = 0x0122;

// Sensors
pub const SENSOR_DEFINITION: u16 = 0x0200;
pub const SENSOR_VALUE: u16 = 0x0201;
pub const RECORD_SENSORS: u16 = 0x0202;

// Power and lamp settings
pub const DEVICE_HOURS: u16 = 0x0400;
pub const LAMP_HOURS: u16 = 0x0401;
pub const LAMP_STRIKES: u16 = 0x0402;
pub const LAMP_STATE: u16 = 0x0403;
pub const LAMP_ON_MODE: u16 = 0x0404;
pub const DEVICE_POWER_CYCLES: u16 = 0x0405;

// Display settings
pub const DISPLAY_INVERT: u16 = 0x0500;
pub const DISPLAY_LEVEL: u16 = 0x0501;

// Configuration
pub const PAN_INVERT: u16 = 0x0600;
pub const TILT_INVERT: u16 = 0x0601;
pub const PAN_TILT_SWAP: u16 = 0x0602;
pub const REAL_TIME_CLOCK: u16 = 0x0603;

// Control
pub const IDENTIFY_DEVICE: u16 = 0x1000;
pub const RESET_DEVICE: u16 = 0x1001;
pub const POWER_STATE: u16 = 0x1010;
pub const PERFORM_SELFTEST: u16 = 0x1020;
pub const SELF_TEST_DESCRIPTION: u16 = 0x1021;
pub const CAPTURE_PRESET: u16 = 0x1030;
pub const PRESET_PLAYBACK: u16 = 0x1031;

/// Whether `pid` lies in the manufacturer-specific range.
pub const fn is_manufacturer_specific(pid: u16) -> bool {
    matches!(pid, 0x8000..=0xFFDF)
}
