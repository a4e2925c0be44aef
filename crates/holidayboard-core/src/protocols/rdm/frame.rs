use super::error::RdmError;
use super::layout;
use super::uid::DeviceUid;
use super::writer::FrameWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CommandClass {
    Discovery = 0x10,
    DiscoveryResponse = 0x11,
    Get = 0x20,
    GetResponse = 0x21,
    Set = 0x30,
    SetResponse = 0x31,
}

impl CommandClass {
    pub fn from_u8(value: u8) -> Result<Self, RdmError> {
        match value {
            0x10 => Ok(Self::Discovery),
            0x11 => Ok(Self::DiscoveryResponse),
            0x20 => Ok(Self::Get),
            0x21 => Ok(Self::GetResponse),
            0x30 => Ok(Self::Set),
            0x31 => Ok(Self::SetResponse),
            _ => Err(RdmError::UnknownCommandClass { value }),
        }
    }

    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Response type byte carried in the port ID slot of a response frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ResponseType {
    Ack = 0x00,
    AckTimer = 0x01,
    NackReason = 0x02,
    AckOverflow = 0x03,
}

impl ResponseType {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(Self::Ack),
            0x01 => Some(Self::AckTimer),
            0x02 => Some(Self::NackReason),
            0x03 => Some(Self::AckOverflow),
            _ => None,
        }
    }

    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Everything needed to assemble one command frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RdmCommand<'a> {
    pub destination: DeviceUid,
    pub source: DeviceUid,
    pub transaction_number: u8,
    pub port_id: u8,
    pub message_count: u8,
    pub sub_device: u16,
    pub command_class: CommandClass,
    pub parameter_id: u16,
    pub parameter_data: &'a [u8],
}

/// Assemble a complete RDM frame, checksum included.
///
/// The output depends only on `command`; transaction numbering is the
/// caller's job (see `TransactionSequencer`).
///
/// # Errors
/// Returns `RdmError::PayloadTooLarge` when the parameter data exceeds
/// 231 bytes.
///
/// # Examples
/// ```
/// use holidayboard_core::protocols::rdm::{build_frame, pid, CommandClass, DeviceUid, RdmCommand};
///
/// let frame = build_frame(&RdmCommand {
///     destination: DeviceUid::from_u64(1),
///     source: DeviceUid::from_u64(2),
///     transaction_number: 0,
///     port_id: 1,
///     message_count: 0,
///     sub_device: 0,
///     command_class: CommandClass::Get,
///     parameter_id: pid::COMMS_STATUS,
///     parameter_data: &[],
/// })?;
/// assert_eq!(frame.len(), 26);
/// assert_eq!(&frame[frame.len() - 2..], &[0x01, 0x1E]);
/// # Ok::<(), holidayboard_core::protocols::rdm::RdmError>(())
/// ```
pub fn build_frame(command: &RdmCommand<'_>) -> Result<Vec<u8>, RdmError> {
    let data_len = command.parameter_data.len();
    if data_len > layout::MAX_PARAMETER_DATA_LEN {
        return Err(RdmError::PayloadTooLarge {
            length: data_len,
            max: layout::MAX_PARAMETER_DATA_LEN,
        });
    }
    // Both fit in a byte once the payload bound holds.
    let message_len = layout::message_len(data_len) as u8;
    let data_len_byte = data_len as u8;

    let mut writer = FrameWriter::with_capacity(layout::frame_len(data_len));
    writer.write_u8(layout::SC_RDM);
    writer.write_u8(layout::SC_SUB_MESSAGE);
    debug_assert_eq!(writer.position(), layout::MESSAGE_LENGTH_OFFSET);
    writer.write_u8(message_len);
    debug_assert_eq!(writer.position(), layout::DESTINATION_UID_RANGE.start);
    writer.write_slice(&command.destination.to_bytes());
    writer.write_slice(&command.source.to_bytes());
    debug_assert_eq!(writer.position(), layout::TRANSACTION_NUMBER_OFFSET);
    writer.write_u8(command.transaction_number);
    writer.write_u8(command.port_id);
    writer.write_u8(command.message_count);
    debug_assert_eq!(writer.position(), layout::SUB_DEVICE_RANGE.start);
    writer.write_u16_be(command.sub_device);
    writer.write_u8(command.command_class.as_u8());
    debug_assert_eq!(writer.position(), layout::PARAMETER_ID_RANGE.start);
    writer.write_u16_be(command.parameter_id);
    writer.write_u8(data_len_byte);
    debug_assert_eq!(writer.position(), layout::PARAMETER_DATA_OFFSET);
    writer.write_slice(command.parameter_data);

    let frame = writer.finish_with_checksum();
    debug_assert_eq!(frame.len(), layout::frame_len(data_len));
    Ok(frame)
}

/// Command fields as received from loosely typed input (CLI, JSON).
///
/// Converting into `RdmCommand` range-checks every numeric field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRdmCommand {
    pub destination: DeviceUid,
    pub source: DeviceUid,
    pub transaction_number: u32,
    pub port_id: u32,
    pub message_count: u32,
    pub sub_device: u32,
    pub command_class: u8,
    pub parameter_id: u32,
    pub parameter_data: Vec<u8>,
}

fn narrow_u8(field: &'static str, value: u32) -> Result<u8, RdmError> {
    u8::try_from(value).map_err(|_| RdmError::FieldOutOfRange {
        field,
        value: u64::from(value),
        max: u64::from(u8::MAX),
    })
}

fn narrow_u16(field: &'static str, value: u32) -> Result<u16, RdmError> {
    u16::try_from(value).map_err(|_| RdmError::FieldOutOfRange {
        field,
        value: u64::from(value),
        max: u64::from(u16::MAX),
    })
}

impl<'a> TryFrom<&'a RawRdmCommand> for RdmCommand<'a> {
    type Error = RdmError;

    fn try_from(raw: &'a RawRdmCommand) -> Result<Self, Self::Error> {
        Ok(Self {
            destination: raw.destination,
            source: raw.source,
            transaction_number: narrow_u8("transaction number", raw.transaction_number)?,
            port_id: narrow_u8("port id", raw.port_id)?,
            message_count: narrow_u8("message count", raw.message_count)?,
            sub_device: narrow_u16("sub-device", raw.sub_device)?,
            command_class: CommandClass::from_u8(raw.command_class)?,
            parameter_id: narrow_u16("parameter id", raw.parameter_id)?,
            parameter_data: &raw.parameter_data,
        })
    }
}
