pub const START_CODE_OFFSET: usize = 0;
pub const SUB_START_CODE_OFFSET: usize = 1;
pub const MESSAGE_LENGTH_OFFSET: usize = 2;
pub const DESTINATION_UID_RANGE: std::ops::Range<usize> = 3..9;
pub const SOURCE_UID_RANGE: std::ops::Range<usize> = 9..15;
pub const TRANSACTION_NUMBER_OFFSET: usize = 15;
pub const PORT_ID_OFFSET: usize = 16;
pub const MESSAGE_COUNT_OFFSET: usize = 17;
pub const SUB_DEVICE_RANGE: std::ops::Range<usize> = 18..20;
pub const COMMAND_CLASS_OFFSET: usize = 20;
pub const PARAMETER_ID_RANGE: std::ops::Range<usize> = 21..23;
pub const PARAMETER_DATA_LENGTH_OFFSET: usize = 23;
pub const PARAMETER_DATA_OFFSET: usize = 24;

pub const UID_LEN: usize = 6;
pub const CHECKSUM_LEN: usize = 2;
pub const MAX_PARAMETER_DATA_LEN: usize = 231;
pub const MAX_FRAME_LEN: usize = PARAMETER_DATA_OFFSET + MAX_PARAMETER_DATA_LEN + CHECKSUM_LEN;

pub const SC_RDM: u8 = 0xCC;
pub const SC_SUB_MESSAGE: u8 = 0x01;

pub const SUB_DEVICE_ROOT: u16 = 0x0000;
pub const SUB_DEVICE_ALL_CALL: u16 = 0xFFFF;

/// Total frame length, checksum included, for `parameter_data_len` bytes of data.
pub const fn frame_len(parameter_data_len: usize) -> usize {
    PARAMETER_DATA_OFFSET + parameter_data_len + CHECKSUM_LEN
}

/// Value of the message length slot: every byte before the checksum.
pub const fn message_len(parameter_data_len: usize) -> usize {
    frame_len(parameter_data_len) - CHECKSUM_LEN
}
