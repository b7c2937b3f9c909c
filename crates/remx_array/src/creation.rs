use crate::{adapter::ArrayAdapter, NdArray};
use rand::distributions::Distribution;
use remx_core::{
    buffer::CpuBuffer,
    dtype::{get_default_dtype, DType},
    error::{Error, Result},
    layout::Layout,
    scalar::Scalar,
};

impl NdArray {
    /// Builds an array from host data, converting to the session's
    /// default dtype (see `set_default_dtype`).
    pub fn new<T>(data: T) -> Result<Self>
    where
        T: ArrayAdapter,
    {
        Self::new_with_dtype(data, get_default_dtype())
    }

    pub fn new_with_dtype<T>(data: T, dtype: DType) -> Result<Self>
    where
        T: ArrayAdapter,
    {
        let shape = data.to_shape();
        let layout = Layout::from_shape(&shape);
        let size = layout.size();

        let src_dtype = data.dtype();
        let src_data = data.to_flat_vec()?;
        if src_data.len() != size {
            return Err(Error::InvalidShape {
                message: format!("Data length {} does not match shape {:?}", src_data.len(), shape),
            });
        }

        let mut buffer = CpuBuffer::new(size, dtype)?;

        if src_dtype == dtype {
            unsafe {
                buffer.copy_from_host(src_data.as_ptr() as *const std::ffi::c_void, size * dtype.size_in_bytes())?;
            }
        } else {
            for (i, elem) in src_data.into_iter().enumerate() {
                buffer.write_scalar(i, elem)?;
            }
        }

        Ok(Self::from_parts(buffer, dtype, layout))
    }

    pub fn empty(shape: &[usize]) -> Result<Self> {
        Self::empty_with_dtype(shape, get_default_dtype())
    }

    pub fn empty_like(src: &NdArray) -> Result<Self> {
        Self::empty_with_dtype(src.shape(), src.dtype())
    }

    pub fn empty_with_dtype(shape: &[usize], dtype: DType) -> Result<Self> {
        let layout = Layout::from_shape(shape);
        let buffer = CpuBuffer::new(layout.size(), dtype)?;

        Ok(Self::from_parts(buffer, dtype, layout))
    }

    pub fn zeros(shape: &[usize]) -> Result<Self> {
        Self::zeros_with_dtype(shape, get_default_dtype())
    }

    pub fn zeros_like(src: &NdArray) -> Result<Self> {
        Self::zeros_with_dtype(src.shape(), src.dtype())
    }

    pub fn zeros_with_dtype(shape: &[usize], dtype: DType) -> Result<Self> {
        // A zeroed byte buffer is the zero value for every supported dtype
        Self::empty_with_dtype(shape, dtype)
    }

    pub fn ones(shape: &[usize]) -> Result<Self> {
        Self::ones_with_dtype(shape, get_default_dtype())
    }

    pub fn ones_like(src: &NdArray) -> Result<Self> {
        Self::ones_with_dtype(src.shape(), src.dtype())
    }

    pub fn ones_with_dtype(shape: &[usize], dtype: DType) -> Result<Self> {
        Self::fill_with_dtype(shape, 1i32, dtype)
    }

    pub fn fill<T: Into<Scalar>>(shape: &[usize], value: T) -> Result<Self> {
        Self::fill_with_dtype(shape, value, get_default_dtype())
    }

    pub fn fill_like<T: Into<Scalar>>(src: &NdArray, value: T) -> Result<Self> {
        Self::fill_with_dtype(src.shape(), value, src.dtype())
    }

    pub fn fill_with_dtype<T: Into<Scalar>>(shape: &[usize], value: T, dtype: DType) -> Result<Self> {
        let layout = Layout::from_shape(shape);
        let size = layout.size();
        let scalar_value = value.into();

        let mut buffer = CpuBuffer::new(size, dtype)?;
        for i in 0..size {
            buffer.write_scalar(i, scalar_value)?;
        }

        Ok(Self::from_parts(buffer, dtype, layout))
    }

    pub fn uniform(shape: &[usize], low: f64, high: f64) -> Result<Self> {
        Self::uniform_with_dtype(shape, low, high, get_default_dtype())
    }

    pub fn uniform_with_dtype(shape: &[usize], low: f64, high: f64, dtype: DType) -> Result<Self> {
        if low >= high {
            return Err(Error::InvalidArgument(format!(
                "Uniform range requires low < high, got {}..{}",
                low, high
            )));
        }

        let size = Layout::compute_size(shape);
        let mut rng = rand::thread_rng();
        let uniform = rand::distributions::Uniform::new(low, high);
        let data: Vec<f64> = (0..size).map(|_| uniform.sample(&mut rng)).collect();

        let mut result = Self::new_with_dtype(data, dtype)?;
        result.with_shape(shape)?;

        Ok(result)
    }

    pub fn randn(shape: &[usize]) -> Result<Self> {
        Self::randn_with_dtype(shape, get_default_dtype())
    }

    pub fn randn_with_dtype(shape: &[usize], dtype: DType) -> Result<Self> {
        let size = Layout::compute_size(shape);
        let mut rng = rand::thread_rng();
        let normal = rand_distr::Normal::new(0.0, 1.0).map_err(|_e| {
            Error::InvalidArgument("Failed to create normal distribution with mean=0.0 and std=1.0".to_string())
        })?;
        let data: Vec<f64> = (0..size).map(|_| normal.sample(&mut rng)).collect();

        let mut result = Self::new_with_dtype(data, dtype)?;
        result.with_shape(shape)?;

        Ok(result)
    }
}
