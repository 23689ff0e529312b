//! Typed views over the TFLite flatbuffer schema
//!
//! Each view wraps a `flatbuffers::Table` and exposes the fields this crate
//! reads, laid out as in `schema.fbs`. Views are only reachable through
//! [`root_as_model`], which runs the `flatbuffers` verifier over the whole
//! buffer first. Every accessor reads a field that its table's `Verifiable`
//! impl visits, which is what makes the unchecked `Table::get` calls sound.

use std::ops::Range;

use flatbuffers::{
    Follow, ForwardsUOffset, InvalidFlatbuffer, Table, VOffsetT, Vector, Verifiable, Verifier,
};

use super::constants::SparseIndexVectorType;

type TableVector<'a, T> = Vector<'a, ForwardsUOffset<T>>;

macro_rules! schema_table {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub(crate) struct $name<'a> {
            tab: Table<'a>,
        }

        impl<'a> Follow<'a> for $name<'a> {
            type Inner = $name<'a>;

            #[inline]
            unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
                Self {
                    tab: Table::new(buf, loc),
                }
            }
        }
    };
}

/// Read a verified field, with or without a schema default
macro_rules! field {
    ($tab:expr, $ty:ty, $slot:expr) => {
        unsafe { $tab.get::<$ty>($slot, None) }
    };
    ($tab:expr, $ty:ty, $slot:expr, $default:expr) => {
        unsafe { $tab.get::<$ty>($slot, Some($default)) }.unwrap_or($default)
    };
}

/// Verify and open the root `Model` table
pub(crate) fn root_as_model(buf: &[u8]) -> Result<Model<'_>, InvalidFlatbuffer> {
    flatbuffers::root::<Model>(buf)
}

/// Collect a scalar vector, empty when the field is absent
pub(crate) fn to_vec<'a, T>(vector: Option<Vector<'a, T>>) -> Vec<T::Inner>
where
    T: Follow<'a> + 'a,
{
    vector.map(|v| v.iter().collect()).unwrap_or_default()
}

schema_table!(Model);

impl<'a> Model<'a> {
    pub const VT_VERSION: VOffsetT = 4;
    pub const VT_OPERATOR_CODES: VOffsetT = 6;
    pub const VT_SUBGRAPHS: VOffsetT = 8;
    pub const VT_DESCRIPTION: VOffsetT = 10;
    pub const VT_BUFFERS: VOffsetT = 12;
    pub const VT_METADATA: VOffsetT = 16;
    pub const VT_SIGNATURE_DEFS: VOffsetT = 18;

    pub fn version(&self) -> u32 {
        field!(self.tab, u32, Self::VT_VERSION, 0)
    }

    pub fn operator_codes(&self) -> Option<TableVector<'a, OperatorCode<'a>>> {
        field!(self.tab, ForwardsUOffset<TableVector<'a, OperatorCode<'a>>>, Self::VT_OPERATOR_CODES)
    }

    pub fn subgraphs(&self) -> Option<TableVector<'a, SubGraph<'a>>> {
        field!(self.tab, ForwardsUOffset<TableVector<'a, SubGraph<'a>>>, Self::VT_SUBGRAPHS)
    }

    pub fn description(&self) -> Option<&'a str> {
        field!(self.tab, ForwardsUOffset<&'a str>, Self::VT_DESCRIPTION)
    }

    pub fn buffers(&self) -> Option<TableVector<'a, Buffer<'a>>> {
        field!(self.tab, ForwardsUOffset<TableVector<'a, Buffer<'a>>>, Self::VT_BUFFERS)
    }

    pub fn metadata(&self) -> Option<TableVector<'a, Metadata<'a>>> {
        field!(self.tab, ForwardsUOffset<TableVector<'a, Metadata<'a>>>, Self::VT_METADATA)
    }

    pub fn signature_defs(&self) -> Option<TableVector<'a, SignatureDef<'a>>> {
        field!(self.tab, ForwardsUOffset<TableVector<'a, SignatureDef<'a>>>, Self::VT_SIGNATURE_DEFS)
    }
}

impl Verifiable for Model<'_> {
    fn run_verifier(v: &mut Verifier, pos: usize) -> Result<(), InvalidFlatbuffer> {
        v.visit_table(pos)?
            .visit_field::<u32>("version", Self::VT_VERSION, false)?
            .visit_field::<ForwardsUOffset<TableVector<'_, OperatorCode<'_>>>>(
                "operator_codes",
                Self::VT_OPERATOR_CODES,
                false,
            )?
            .visit_field::<ForwardsUOffset<TableVector<'_, SubGraph<'_>>>>(
                "subgraphs",
                Self::VT_SUBGRAPHS,
                false,
            )?
            .visit_field::<ForwardsUOffset<&str>>("description", Self::VT_DESCRIPTION, false)?
            .visit_field::<ForwardsUOffset<TableVector<'_, Buffer<'_>>>>(
                "buffers",
                Self::VT_BUFFERS,
                false,
            )?
            .visit_field::<ForwardsUOffset<TableVector<'_, Metadata<'_>>>>(
                "metadata",
                Self::VT_METADATA,
                false,
            )?
            .visit_field::<ForwardsUOffset<TableVector<'_, SignatureDef<'_>>>>(
                "signature_defs",
                Self::VT_SIGNATURE_DEFS,
                false,
            )?
            .finish();
        Ok(())
    }
}

schema_table!(OperatorCode);

impl<'a> OperatorCode<'a> {
    pub const VT_DEPRECATED_BUILTIN_CODE: VOffsetT = 4;
    pub const VT_CUSTOM_CODE: VOffsetT = 6;
    pub const VT_VERSION: VOffsetT = 8;
    pub const VT_BUILTIN_CODE: VOffsetT = 10;

    pub fn deprecated_builtin_code(&self) -> i8 {
        field!(self.tab, i8, Self::VT_DEPRECATED_BUILTIN_CODE, 0)
    }

    pub fn custom_code(&self) -> Option<&'a str> {
        field!(self.tab, ForwardsUOffset<&'a str>, Self::VT_CUSTOM_CODE)
    }

    pub fn version(&self) -> i32 {
        field!(self.tab, i32, Self::VT_VERSION, 1)
    }

    pub fn builtin_code(&self) -> i32 {
        field!(self.tab, i32, Self::VT_BUILTIN_CODE, 0)
    }
}

impl Verifiable for OperatorCode<'_> {
    fn run_verifier(v: &mut Verifier, pos: usize) -> Result<(), InvalidFlatbuffer> {
        v.visit_table(pos)?
            .visit_field::<i8>(
                "deprecated_builtin_code",
                Self::VT_DEPRECATED_BUILTIN_CODE,
                false,
            )?
            .visit_field::<ForwardsUOffset<&str>>("custom_code", Self::VT_CUSTOM_CODE, false)?
            .visit_field::<i32>("version", Self::VT_VERSION, false)?
            .visit_field::<i32>("builtin_code", Self::VT_BUILTIN_CODE, false)?
            .finish();
        Ok(())
    }
}

schema_table!(SubGraph);

impl<'a> SubGraph<'a> {
    pub const VT_TENSORS: VOffsetT = 4;
    pub const VT_INPUTS: VOffsetT = 6;
    pub const VT_OUTPUTS: VOffsetT = 8;
    pub const VT_OPERATORS: VOffsetT = 10;
    pub const VT_NAME: VOffsetT = 12;

    pub fn tensors(&self) -> Option<TableVector<'a, Tensor<'a>>> {
        field!(self.tab, ForwardsUOffset<TableVector<'a, Tensor<'a>>>, Self::VT_TENSORS)
    }

    pub fn inputs(&self) -> Option<Vector<'a, i32>> {
        field!(self.tab, ForwardsUOffset<Vector<'a, i32>>, Self::VT_INPUTS)
    }

    pub fn outputs(&self) -> Option<Vector<'a, i32>> {
        field!(self.tab, ForwardsUOffset<Vector<'a, i32>>, Self::VT_OUTPUTS)
    }

    pub fn operators(&self) -> Option<TableVector<'a, Operator<'a>>> {
        field!(self.tab, ForwardsUOffset<TableVector<'a, Operator<'a>>>, Self::VT_OPERATORS)
    }

    pub fn name(&self) -> Option<&'a str> {
        field!(self.tab, ForwardsUOffset<&'a str>, Self::VT_NAME)
    }
}

impl Verifiable for SubGraph<'_> {
    fn run_verifier(v: &mut Verifier, pos: usize) -> Result<(), InvalidFlatbuffer> {
        v.visit_table(pos)?
            .visit_field::<ForwardsUOffset<TableVector<'_, Tensor<'_>>>>(
                "tensors",
                Self::VT_TENSORS,
                false,
            )?
            .visit_field::<ForwardsUOffset<Vector<'_, i32>>>("inputs", Self::VT_INPUTS, false)?
            .visit_field::<ForwardsUOffset<Vector<'_, i32>>>("outputs", Self::VT_OUTPUTS, false)?
            .visit_field::<ForwardsUOffset<TableVector<'_, Operator<'_>>>>(
                "operators",
                Self::VT_OPERATORS,
                false,
            )?
            .visit_field::<ForwardsUOffset<&str>>("name", Self::VT_NAME, false)?
            .finish();
        Ok(())
    }
}

schema_table!(
    /// Operators are only counted; none of their fields are read
    Operator
);

impl Verifiable for Operator<'_> {
    fn run_verifier(v: &mut Verifier, pos: usize) -> Result<(), InvalidFlatbuffer> {
        v.visit_table(pos)?.finish();
        Ok(())
    }
}

schema_table!(Tensor);

impl<'a> Tensor<'a> {
    pub const VT_SHAPE: VOffsetT = 4;
    pub const VT_TYPE: VOffsetT = 6;
    pub const VT_BUFFER: VOffsetT = 8;
    pub const VT_NAME: VOffsetT = 10;
    pub const VT_QUANTIZATION: VOffsetT = 12;
    pub const VT_SPARSITY: VOffsetT = 16;
    pub const VT_SHAPE_SIGNATURE: VOffsetT = 18;

    pub fn shape(&self) -> Option<Vector<'a, i32>> {
        field!(self.tab, ForwardsUOffset<Vector<'a, i32>>, Self::VT_SHAPE)
    }

    pub fn type_(&self) -> i8 {
        field!(self.tab, i8, Self::VT_TYPE, 0)
    }

    pub fn buffer(&self) -> u32 {
        field!(self.tab, u32, Self::VT_BUFFER, 0)
    }

    pub fn name(&self) -> Option<&'a str> {
        field!(self.tab, ForwardsUOffset<&'a str>, Self::VT_NAME)
    }

    pub fn quantization(&self) -> Option<QuantizationParameters<'a>> {
        field!(self.tab, ForwardsUOffset<QuantizationParameters<'a>>, Self::VT_QUANTIZATION)
    }

    pub fn sparsity(&self) -> Option<SparsityParameters<'a>> {
        field!(self.tab, ForwardsUOffset<SparsityParameters<'a>>, Self::VT_SPARSITY)
    }

    pub fn shape_signature(&self) -> Option<Vector<'a, i32>> {
        field!(self.tab, ForwardsUOffset<Vector<'a, i32>>, Self::VT_SHAPE_SIGNATURE)
    }
}

impl Verifiable for Tensor<'_> {
    fn run_verifier(v: &mut Verifier, pos: usize) -> Result<(), InvalidFlatbuffer> {
        v.visit_table(pos)?
            .visit_field::<ForwardsUOffset<Vector<'_, i32>>>("shape", Self::VT_SHAPE, false)?
            .visit_field::<i8>("type", Self::VT_TYPE, false)?
            .visit_field::<u32>("buffer", Self::VT_BUFFER, false)?
            .visit_field::<ForwardsUOffset<&str>>("name", Self::VT_NAME, false)?
            .visit_field::<ForwardsUOffset<QuantizationParameters<'_>>>(
                "quantization",
                Self::VT_QUANTIZATION,
                false,
            )?
            .visit_field::<ForwardsUOffset<SparsityParameters<'_>>>(
                "sparsity",
                Self::VT_SPARSITY,
                false,
            )?
            .visit_field::<ForwardsUOffset<Vector<'_, i32>>>(
                "shape_signature",
                Self::VT_SHAPE_SIGNATURE,
                false,
            )?
            .finish();
        Ok(())
    }
}

schema_table!(QuantizationParameters);

impl<'a> QuantizationParameters<'a> {
    pub const VT_SCALE: VOffsetT = 8;
    pub const VT_ZERO_POINT: VOffsetT = 10;
    pub const VT_QUANTIZED_DIMENSION: VOffsetT = 16;

    pub fn scale(&self) -> Option<Vector<'a, f32>> {
        field!(self.tab, ForwardsUOffset<Vector<'a, f32>>, Self::VT_SCALE)
    }

    pub fn zero_point(&self) -> Option<Vector<'a, i64>> {
        field!(self.tab, ForwardsUOffset<Vector<'a, i64>>, Self::VT_ZERO_POINT)
    }

    pub fn quantized_dimension(&self) -> i32 {
        field!(self.tab, i32, Self::VT_QUANTIZED_DIMENSION, 0)
    }
}

impl Verifiable for QuantizationParameters<'_> {
    fn run_verifier(v: &mut Verifier, pos: usize) -> Result<(), InvalidFlatbuffer> {
        v.visit_table(pos)?
            .visit_field::<ForwardsUOffset<Vector<'_, f32>>>("scale", Self::VT_SCALE, false)?
            .visit_field::<ForwardsUOffset<Vector<'_, i64>>>(
                "zero_point",
                Self::VT_ZERO_POINT,
                false,
            )?
            .visit_field::<i32>(
                "quantized_dimension",
                Self::VT_QUANTIZED_DIMENSION,
                false,
            )?
            .finish();
        Ok(())
    }
}

schema_table!(SparsityParameters);

impl<'a> SparsityParameters<'a> {
    pub const VT_TRAVERSAL_ORDER: VOffsetT = 4;
    pub const VT_BLOCK_MAP: VOffsetT = 6;
    pub const VT_DIM_METADATA: VOffsetT = 8;

    pub fn traversal_order(&self) -> Option<Vector<'a, i32>> {
        field!(self.tab, ForwardsUOffset<Vector<'a, i32>>, Self::VT_TRAVERSAL_ORDER)
    }

    pub fn block_map(&self) -> Option<Vector<'a, i32>> {
        field!(self.tab, ForwardsUOffset<Vector<'a, i32>>, Self::VT_BLOCK_MAP)
    }

    pub fn dim_metadata(&self) -> Option<TableVector<'a, DimensionMetadata<'a>>> {
        field!(self.tab, ForwardsUOffset<TableVector<'a, DimensionMetadata<'a>>>, Self::VT_DIM_METADATA)
    }
}

impl Verifiable for SparsityParameters<'_> {
    fn run_verifier(v: &mut Verifier, pos: usize) -> Result<(), InvalidFlatbuffer> {
        v.visit_table(pos)?
            .visit_field::<ForwardsUOffset<Vector<'_, i32>>>(
                "traversal_order",
                Self::VT_TRAVERSAL_ORDER,
                false,
            )?
            .visit_field::<ForwardsUOffset<Vector<'_, i32>>>(
                "block_map",
                Self::VT_BLOCK_MAP,
                false,
            )?
            .visit_field::<ForwardsUOffset<TableVector<'_, DimensionMetadata<'_>>>>(
                "dim_metadata",
                Self::VT_DIM_METADATA,
                false,
            )?
            .finish();
        Ok(())
    }
}

schema_table!(DimensionMetadata);

impl<'a> DimensionMetadata<'a> {
    pub const VT_FORMAT: VOffsetT = 4;
    pub const VT_DENSE_SIZE: VOffsetT = 6;
    pub const VT_ARRAY_SEGMENTS_TYPE: VOffsetT = 8;
    pub const VT_ARRAY_SEGMENTS: VOffsetT = 10;
    pub const VT_ARRAY_INDICES_TYPE: VOffsetT = 12;
    pub const VT_ARRAY_INDICES: VOffsetT = 14;

    pub fn format(&self) -> i8 {
        field!(self.tab, i8, Self::VT_FORMAT, 0)
    }

    pub fn dense_size(&self) -> i32 {
        field!(self.tab, i32, Self::VT_DENSE_SIZE, 0)
    }

    /// `array_segments` widened to `i32`; `Err` carries an unknown union tag
    pub fn array_segments(&self) -> Result<Vec<i32>, u8> {
        self.index_vector(Self::VT_ARRAY_SEGMENTS_TYPE, Self::VT_ARRAY_SEGMENTS)
    }

    /// `array_indices` widened to `i32`; `Err` carries an unknown union tag
    pub fn array_indices(&self) -> Result<Vec<i32>, u8> {
        self.index_vector(Self::VT_ARRAY_INDICES_TYPE, Self::VT_ARRAY_INDICES)
    }

    fn index_vector(&self, type_slot: VOffsetT, value_slot: VOffsetT) -> Result<Vec<i32>, u8> {
        let kind = SparseIndexVectorType::try_from(field!(self.tab, u8, type_slot, 0))?;
        let Some(tab) = field!(self.tab, ForwardsUOffset<Table<'a>>, value_slot) else {
            return Ok(Vec::new());
        };

        // The verifier checked `tab` against the variant named by `kind`
        Ok(match kind {
            SparseIndexVectorType::None => Vec::new(),
            SparseIndexVectorType::Int32Vector => to_vec(Int32Vector { tab }.values()),
            SparseIndexVectorType::Uint16Vector => to_vec(Uint16Vector { tab }.values())
                .into_iter()
                .map(i32::from)
                .collect(),
            SparseIndexVectorType::Uint8Vector => to_vec(Uint8Vector { tab }.values())
                .into_iter()
                .map(i32::from)
                .collect(),
        })
    }
}

fn verify_index_vector(tag: u8, v: &mut Verifier, pos: usize) -> Result<(), InvalidFlatbuffer> {
    match SparseIndexVectorType::try_from(tag) {
        Ok(SparseIndexVectorType::Int32Vector) => v
            .verify_union_variant::<ForwardsUOffset<Int32Vector<'_>>>(
                "SparseIndexVector::Int32Vector",
                pos,
            ),
        Ok(SparseIndexVectorType::Uint16Vector) => v
            .verify_union_variant::<ForwardsUOffset<Uint16Vector<'_>>>(
                "SparseIndexVector::Uint16Vector",
                pos,
            ),
        Ok(SparseIndexVectorType::Uint8Vector) => v
            .verify_union_variant::<ForwardsUOffset<Uint8Vector<'_>>>(
                "SparseIndexVector::Uint8Vector",
                pos,
            ),
        // Unknown tags are reported by the reader
        Ok(SparseIndexVectorType::None) | Err(_) => Ok(()),
    }
}

impl Verifiable for DimensionMetadata<'_> {
    fn run_verifier(v: &mut Verifier, pos: usize) -> Result<(), InvalidFlatbuffer> {
        v.visit_table(pos)?
            .visit_field::<i8>("format", Self::VT_FORMAT, false)?
            .visit_field::<i32>("dense_size", Self::VT_DENSE_SIZE, false)?
            .visit_union::<u8, _>(
                "array_segments_type",
                Self::VT_ARRAY_SEGMENTS_TYPE,
                "array_segments",
                Self::VT_ARRAY_SEGMENTS,
                false,
                verify_index_vector,
            )?
            .visit_union::<u8, _>(
                "array_indices_type",
                Self::VT_ARRAY_INDICES_TYPE,
                "array_indices",
                Self::VT_ARRAY_INDICES,
                false,
                verify_index_vector,
            )?
            .finish();
        Ok(())
    }
}

macro_rules! index_vector_table {
    ($name:ident, $elem:ty) => {
        schema_table!($name);

        impl<'a> $name<'a> {
            pub const VT_VALUES: VOffsetT = 4;

            pub fn values(&self) -> Option<Vector<'a, $elem>> {
                field!(self.tab, ForwardsUOffset<Vector<'a, $elem>>, Self::VT_VALUES)
            }
        }

        impl Verifiable for $name<'_> {
            fn run_verifier(v: &mut Verifier, pos: usize) -> Result<(), InvalidFlatbuffer> {
                v.visit_table(pos)?
                    .visit_field::<ForwardsUOffset<Vector<'_, $elem>>>(
                        "values",
                        Self::VT_VALUES,
                        false,
                    )?
                    .finish();
                Ok(())
            }
        }
    };
}

index_vector_table!(Int32Vector, i32);
index_vector_table!(Uint16Vector, u16);
index_vector_table!(Uint8Vector, u8);

schema_table!(Buffer);

impl<'a> Buffer<'a> {
    pub const VT_DATA: VOffsetT = 4;
    pub const VT_OFFSET: VOffsetT = 6;
    pub const VT_SIZE: VOffsetT = 8;

    pub fn data(&self) -> Option<Vector<'a, u8>> {
        field!(self.tab, ForwardsUOffset<Vector<'a, u8>>, Self::VT_DATA)
    }

    /// Position of the inline data within the model buffer
    pub fn data_range(&self) -> Option<Range<usize>> {
        let bytes = self.data()?.bytes();
        let start = bytes.as_ptr() as usize - self.tab.buf().as_ptr() as usize;
        Some(start..start + bytes.len())
    }

    pub fn offset(&self) -> u64 {
        field!(self.tab, u64, Self::VT_OFFSET, 0)
    }

    pub fn size(&self) -> u64 {
        field!(self.tab, u64, Self::VT_SIZE, 0)
    }
}

impl Verifiable for Buffer<'_> {
    fn run_verifier(v: &mut Verifier, pos: usize) -> Result<(), InvalidFlatbuffer> {
        v.visit_table(pos)?
            .visit_field::<ForwardsUOffset<Vector<'_, u8>>>("data", Self::VT_DATA, false)?
            .visit_field::<u64>("offset", Self::VT_OFFSET, false)?
            .visit_field::<u64>("size", Self::VT_SIZE, false)?
            .finish();
        Ok(())
    }
}

schema_table!(Metadata);

impl<'a> Metadata<'a> {
    pub const VT_NAME: VOffsetT = 4;
    pub const VT_BUFFER: VOffsetT = 6;

    pub fn name(&self) -> Option<&'a str> {
        field!(self.tab, ForwardsUOffset<&'a str>, Self::VT_NAME)
    }

    pub fn buffer(&self) -> u32 {
        field!(self.tab, u32, Self::VT_BUFFER, 0)
    }
}

impl Verifiable for Metadata<'_> {
    fn run_verifier(v: &mut Verifier, pos: usize) -> Result<(), InvalidFlatbuffer> {
        v.visit_table(pos)?
            .visit_field::<ForwardsUOffset<&str>>("name", Self::VT_NAME, false)?
            .visit_field::<u32>("buffer", Self::VT_BUFFER, false)?
            .finish();
        Ok(())
    }
}

schema_table!(SignatureDef);

impl<'a> SignatureDef<'a> {
    pub const VT_INPUTS: VOffsetT = 4;
    pub const VT_OUTPUTS: VOffsetT = 6;
    pub const VT_SIGNATURE_KEY: VOffsetT = 8;
    pub const VT_SUBGRAPH_INDEX: VOffsetT = 12;

    pub fn inputs(&self) -> Option<TableVector<'a, TensorMap<'a>>> {
        field!(self.tab, ForwardsUOffset<TableVector<'a, TensorMap<'a>>>, Self::VT_INPUTS)
    }

    pub fn outputs(&self) -> Option<TableVector<'a, TensorMap<'a>>> {
        field!(self.tab, ForwardsUOffset<TableVector<'a, TensorMap<'a>>>, Self::VT_OUTPUTS)
    }

    pub fn signature_key(&self) -> Option<&'a str> {
        field!(self.tab, ForwardsUOffset<&'a str>, Self::VT_SIGNATURE_KEY)
    }

    pub fn subgraph_index(&self) -> u32 {
        field!(self.tab, u32, Self::VT_SUBGRAPH_INDEX, 0)
    }
}

impl Verifiable for SignatureDef<'_> {
    fn run_verifier(v: &mut Verifier, pos: usize) -> Result<(), InvalidFlatbuffer> {
        v.visit_table(pos)?
            .visit_field::<ForwardsUOffset<TableVector<'_, TensorMap<'_>>>>(
                "inputs",
                Self::VT_INPUTS,
                false,
            )?
            .visit_field::<ForwardsUOffset<TableVector<'_, TensorMap<'_>>>>(
                "outputs",
                Self::VT_OUTPUTS,
                false,
            )?
            .visit_field::<ForwardsUOffset<&str>>(
                "signature_key",
                Self::VT_SIGNATURE_KEY,
                false,
            )?
            .visit_field::<u32>("subgraph_index", Self::VT_SUBGRAPH_INDEX, false)?
            .finish();
        Ok(())
    }
}

schema_table!(TensorMap);

impl<'a> TensorMap<'a> {
    pub const VT_NAME: VOffsetT = 4;
    pub const VT_TENSOR_INDEX: VOffsetT = 6;

    pub fn name(&self) -> Option<&'a str> {
        field!(self.tab, ForwardsUOffset<&'a str>, Self::VT_NAME)
    }

    pub fn tensor_index(&self) -> u32 {
        field!(self.tab, u32, Self::VT_TENSOR_INDEX, 0)
    }
}

impl Verifiable for TensorMap<'_> {
    fn run_verifier(v: &mut Verifier, pos: usize) -> Result<(), InvalidFlatbuffer> {
        v.visit_table(pos)?
            .visit_field::<ForwardsUOffset<&str>>("name", Self::VT_NAME, false)?
            .visit_field::<u32>("tensor_index", Self::VT_TENSOR_INDEX, false)?
            .finish();
        Ok(())
    }
}
