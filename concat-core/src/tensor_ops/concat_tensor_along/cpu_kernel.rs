use std::sync::Arc;

use crate::{
    dtypes::Unit,
    tensor::{Cpu, Error, Tensor},
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Exclusive prefix sum of `sizes`, scaled by `inner`.
fn chunk_offsets(sizes: impl Iterator<Item = usize>, inner: usize) -> Vec<usize> {
    let mut offset = 0;
    sizes
        .map(|size| {
            let start = offset;
            offset += size * inner;
            start
        })
        .collect()
}

impl<E: Unit> super::ConcatAlongKernel<E> for Cpu {
    fn forward(
        &self,
        ax: usize,
        inputs: &[Tensor<E, Self>],
        out: &mut Tensor<E, Self>,
    ) -> Result<(), Error> {
        // The output is `outer` rows of `row_len` elements. Input `i` owns
        // `chunks[i]` contiguous elements of every row, starting at `starts[i]`.
        // With no elements, none of these products are bounded by the buffer.
        if out.shape.num_elements() == 0 {
            return Ok(());
        }
        let inner = out.shape.inner_size(ax);
        let row_len = out.shape[ax] * inner;

        let starts = chunk_offsets(inputs.iter().map(|t| t.shape[ax]), inner);
        let chunks: Vec<usize> = inputs.iter().map(|t| t.shape[ax] * inner).collect();
        log::trace!("concat forward: row_len={row_len} starts={starts:?}");

        let copy_row = |(o, row): (usize, &mut [E])| {
            for ((t, &start), &chunk) in inputs.iter().zip(starts.iter()).zip(chunks.iter()) {
                row[start..start + chunk].copy_from_slice(&t.data[o * chunk..(o + 1) * chunk]);
            }
        };

        let buf = Arc::make_mut(&mut out.data);

        #[cfg(feature = "parallel")]
        buf.par_chunks_mut(row_len).enumerate().for_each(copy_row);

        #[cfg(not(feature = "parallel"))]
        buf.chunks_mut(row_len).enumerate().for_each(copy_row);

        Ok(())
    }

    fn backward(
        &self,
        ax: usize,
        grad_out: &Tensor<E, Self>,
        grads: &mut [Tensor<E, Self>],
    ) -> Result<(), Error> {
        if grad_out.shape.num_elements() == 0 {
            return Ok(());
        }
        let inner = grad_out.shape.inner_size(ax);
        let row_len = grad_out.shape[ax] * inner;
        let starts = chunk_offsets(grads.iter().map(|g| g.shape[ax]), inner);
        log::trace!("concat backward: row_len={row_len} starts={starts:?}");

        let src = grad_out.data.as_slice();
        let split_one = |(grad, start): (&mut Tensor<E, Self>, usize)| {
            let chunk = grad.shape[ax] * inner;
            if chunk == 0 {
                return;
            }
            let dst = Arc::make_mut(&mut grad.data);
            for (o, piece) in dst.chunks_mut(chunk).enumerate() {
                let from = o * row_len + start;
                piece.copy_from_slice(&src[from..from + chunk]);
            }
        };

        #[cfg(feature = "parallel")]
        grads
            .par_iter_mut()
            .zip(starts.into_par_iter())
            .for_each(split_one);

        #[cfg(not(feature = "parallel"))]
        grads.iter_mut().zip(starts).for_each(split_one);

        Ok(())
    }
}
