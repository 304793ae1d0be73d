// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2022 The armv7m-boot developers

//! Link-time memory layout symbols.
//!
//! Ownership of the actual numeric addresses belongs to the linker script; this module only
//! names the boundaries and assembles them into a [`MemoryLayout`].
//! 実際のaddressはlinker scriptが決める．ここではsymbolに名前を付けて構造体にまとめるだけ．

use super::MemoryLayout;
use core::{cell::UnsafeCell, ops::Range};

//--------------------------------------------------------------------------------------------------
// Private Definitions
//--------------------------------------------------------------------------------------------------

// Symbols from the linker script.
// linker scriptで定義されているsymbol
extern "Rust" {
    static __stack_low: UnsafeCell<u8>;
    static __stack_high: UnsafeCell<u8>;
    static __heap_low: UnsafeCell<u8>;
    static __heap_high: UnsafeCell<u8>;
    static __vector_table_start: UnsafeCell<u32>;
    static __data_load_start: UnsafeCell<u8>;
    static __data_start: UnsafeCell<u8>;
    static __data_end_exclusive: UnsafeCell<u8>;
    static __bss_start: UnsafeCell<u8>;
    static __bss_end_exclusive: UnsafeCell<u8>;
}

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// Return the half-open range spanning the main stack.
/// main stackの範囲を返す
///
/// Applications may use this, for instance, to check a saved stack pointer against
/// `stack_range().start` when hunting for an overflow.
pub fn stack_range() -> Range<*mut u8> {
    // Values are provided by the linker script and must be trusted as-is.
    unsafe { __stack_low.get()..__stack_high.get() }
}

/// Return the half-open range reserved for the heap.
/// heapの範囲を返す
pub fn heap_range() -> Range<*mut u8> {
    unsafe { __heap_low.get()..__heap_high.get() }
}

/// Return the start address of the `.vector_table` section.
/// `.vector_table`の先頭addressを返す
pub fn vector_table_start() -> *const u32 {
    unsafe { __vector_table_start.get() as *const u32 }
}

/// Return the half-open range spanning the `.bss` section.
/// `.bss`の範囲を返す
///
/// The range may be empty; a stack-only image is legal.
/// 空でも構わない
pub fn bss_range() -> Range<*mut u8> {
    unsafe { __bss_start.get()..__bss_end_exclusive.get() }
}

/// Return the half-open destination range of the `.data` section.
/// `.data`のcopy先の範囲を返す
pub fn data_range() -> Range<*mut u8> {
    unsafe { __data_start.get()..__data_end_exclusive.get() }
}

/// Return the load address the `.data` image is copied from.
/// `.data`のcopy元の先頭addressを返す
pub fn data_load_start() -> *const u8 {
    unsafe { __data_load_start.get() as *const u8 }
}

/// Assemble the full layout contract from the linker-provided symbols.
/// linkerが決めた値からlayout契約の構造体を組み立てる
pub fn memory_layout() -> MemoryLayout {
    MemoryLayout {
        stack: stack_range(),
        heap: heap_range(),
        vector_table: vector_table_start(),
        data_load: data_load_start(),
        data: data_range(),
        bss: bss_range(),
    }
}
