// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2022 The armv7m-boot developers

//! Memory Management.

#[cfg(target_arch = "arm")]
pub mod layout;

use core::ops::Range;

//--------------------------------------------------------------------------------------------------
// Public Definitions
//--------------------------------------------------------------------------------------------------

/// The link-time memory layout contract.
/// link時に決まるmemory layoutの契約をまとめた構造体
///
/// All values are resolved once by the linker and read many times afterwards; the struct is
/// plain data so a host-side harness can fabricate one over ordinary buffers.
/// 全てlinkerが一度だけ決める値で，以後は読み取り専用．
#[derive(Clone, Debug)]
pub struct MemoryLayout {
    /// Main stack bounds. The high end is what vector table slot 0 must hold. Note that this
    /// might not be the only stack in the system.
    /// main stackの範囲．上端がvector tableのslot 0に入る値
    pub stack: Range<*mut u8>,

    /// Address range reserved for the heap. Reported, never touched, by the boot path.
    /// heapとして予約された範囲．boot処理は中身に触らない
    pub heap: Range<*mut u8>,

    /// Start of the `.vector_table` section. This can be used to set VTOR (vector table
    /// offset register) by a bootloader.
    /// `.vector_table`の先頭
    pub vector_table: *const u32,

    /// Load address the `.data` image is copied from, part of the read-only program image.
    /// `.data`のcopy元(flash上)
    pub data_load: *const u8,

    /// `.data` destination range in RAM.
    /// `.data`のcopy先(RAM上)
    pub data: Range<*mut u8>,

    /// `.bss` destination range in RAM.
    /// 0埋めされる`.bss`の範囲(RAM上)
    pub bss: Range<*mut u8>,
}

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// Zero out a half-open memory range.
/// memory領域の0埋め
///
/// An empty range is a no-op, so stack-only images without any zeroed statics are fine.
/// 空の領域なら何もしない
///
/// # Safety
///
/// - `range.start` and `range.end` must be valid for writes, or equal.
/// - `range.start` and `range.end` must be `T` aligned.
pub unsafe fn zero_volatile<T>(range: Range<*mut T>)
where
    T: From<u8>,
{
    let mut ptr = range.start;
    // rangeのstartからendの手前まで0埋め
    while ptr < range.end {
        core::ptr::write_volatile(ptr, T::from(0));
        ptr = ptr.offset(1);
    }
}

/// Copy a read-only image into a half-open memory range, preserving order and exact values.
/// memory領域へのcopy．順番と値をそのまま保つ
///
/// An empty range is a no-op and `src` is not read at all in that case.
/// 空の領域なら何もしないしcopy元も読まない
///
/// # Safety
///
/// - `range.start` and `range.end` must be valid for writes, or equal.
/// - `src` must be valid for reads of as many elements as the range holds.
/// - All pointers must be `T` aligned, and source and destination must not overlap.
pub unsafe fn copy_volatile<T>(mut src: *const T, range: Range<*mut T>)
where
    T: Copy,
{
    let mut dst = range.start;
    // copy元とcopy先を1要素ずつ進めながらcopy
    while dst < range.end {
        core::ptr::write_volatile(dst, core::ptr::read_volatile(src));
        dst = dst.offset(1);
        src = src.offset(1);
    }
}

//--------------------------------------------------------------------------------------------------
// Testing
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// Check `zero_volatile()`.
    #[test]
    fn zero_volatile_works() {
        let mut x: [usize; 3] = [10, 11, 12];

        unsafe { zero_volatile(x.as_mut_ptr_range()) };

        assert_eq!(x, [0, 0, 0]);
    }

    /// Check `copy_volatile()`.
    #[test]
    fn copy_volatile_works() {
        let src: [u8; 4] = [0xDE, 0xAD, 0xBE, 0xEF];
        let mut dst: [u8; 4] = [0xFF; 4];

        unsafe { copy_volatile(src.as_ptr(), dst.as_mut_ptr_range()) };

        assert_eq!(dst, src);
    }

    /// Empty ranges must not touch memory at all.
    #[test]
    fn empty_ranges_are_noops() {
        let mut guard: [u8; 2] = [0x55, 0x66];
        let mid = unsafe { guard.as_mut_ptr().offset(1) };

        // Zero-length range in the middle of the guard bytes.
        unsafe {
            zero_volatile(mid..mid);
            copy_volatile(core::ptr::null(), mid..mid);
        }

        assert_eq!(guard, [0x55, 0x66]);
    }

    /// Neighbouring bytes outside the given range must be left alone.
    #[test]
    fn operations_stay_in_bounds() {
        let src: [u8; 2] = [0xAA, 0xBB];
        let mut ram: [u8; 6] = [0xFF; 6];
        let dst = unsafe { ram.as_mut_ptr().offset(1)..ram.as_mut_ptr().offset(3) };
        let bss = unsafe { ram.as_mut_ptr().offset(4)..ram.as_mut_ptr().offset(5) };

        unsafe {
            copy_volatile(src.as_ptr(), dst);
            zero_volatile(bss);
        }

        assert_eq!(ram, [0xFF, 0xAA, 0xBB, 0xFF, 0x00, 0xFF]);
    }
}
