use crate::NdArray;
use remx_core::{buffer::CpuBuffer, dtype::DType, layout::Layout};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize, Deserialize)]
struct SerializedArrayData {
    buffer_data: Vec<u8>,
    buffer_len: usize,
    buffer_dtype: DType,
}

#[derive(Serialize, Deserialize)]
struct SerializedArrayMetadata {
    dtype: DType,
    layout: Layout,
}

#[derive(Serialize, Deserialize)]
struct SerializedArray {
    data: SerializedArrayData,
    metadata: SerializedArrayMetadata,
}

impl Serialize for NdArray {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let buffer = self.buffer();

        let serialized = SerializedArray {
            data: SerializedArrayData {
                buffer_data: buffer.as_bytes().to_vec(),
                buffer_len: buffer.len(),
                buffer_dtype: buffer.dtype(),
            },
            metadata: SerializedArrayMetadata {
                dtype: self.dtype(),
                layout: self.layout().clone(),
            },
        };

        serialized.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NdArray {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let serialized = SerializedArray::deserialize(deserializer)?;

        let dtype = serialized.data.buffer_dtype;
        let expected_bytes = serialized.data.buffer_len * dtype.size_in_bytes();
        if serialized.data.buffer_data.len() != expected_bytes {
            return Err(de::Error::custom(format!(
                "Buffer byte length {} does not match {} elements of {}",
                serialized.data.buffer_data.len(),
                serialized.data.buffer_len,
                dtype.as_str()
            )));
        }
        if serialized.metadata.dtype != dtype {
            return Err(de::Error::custom(format!(
                "Metadata dtype {} does not match buffer dtype {}",
                serialized.metadata.dtype.as_str(),
                dtype.as_str()
            )));
        }
        if serialized.metadata.layout.size() != serialized.data.buffer_len {
            return Err(de::Error::custom(format!(
                "Layout size {} does not match buffer length {}",
                serialized.metadata.layout.size(),
                serialized.data.buffer_len
            )));
        }

        let mut buffer = CpuBuffer::new(serialized.data.buffer_len, dtype).map_err(de::Error::custom)?;
        unsafe {
            buffer
                .copy_from_host(
                    serialized.data.buffer_data.as_ptr() as *const std::ffi::c_void,
                    serialized.data.buffer_data.len(),
                )
                .map_err(de::Error::custom)?;
        }

        Ok(NdArray::from_parts(buffer, serialized.metadata.dtype, serialized.metadata.layout))
    }
}
