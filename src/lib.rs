// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2022 The armv7m-boot developers

//! ARMv7-M boot support.
//!
//! This crate plays the role a traditional assembly startup file pairs with a linker script:
//! it brings static memory into the state the rest of the image assumes, then hands control
//! to the application. Everything an ARMv7-M startup typically does in assembly can be done
//! straight from Rust, which keeps the code easy to read, modify and test.
//! 伝統的にassemblyで書かれるstartup処理をRustだけで実現するcrate．
//!
//! # Orientation
//!
//! Core initialization is comprised of two primary parts:
//!
//! 1. Boot information from the ARMv7-M vector table: on power-on the SoC reads the starting
//!    Stack Pointer from slot 0 and the starting Program Counter from slot 1 of the vector
//!    table. This crate does not provide the vector table itself; it only requires slot 1 to
//!    point at `_start_rust()`.
//!    SoCがvector tableのslot 0からSP，slot 1からPCを読み込む．
//!
//! 2. Static memory initialization: before ANYTHING else runs, the `.bss` section must be
//!    zeroed and the `.data` section copied from its load address in flash to RAM. This is
//!    done at the beginning of `runtime_init::runtime_init()`.
//!    何よりも先に`.bss`の0埋めと`.data`のcopyをやる．
//!
//! The simple flow is as follows:
//!
//! Power on -> SP and PC set (from the vector table by the SoC) -> `_start_rust()`
//!
//! In `_start_rust()`:
//!
//! Initialize memory -> `pre_main_init()` -> `main()`

#![no_std]

mod cpu;
pub mod memory;
pub mod runtime_init;

#[cfg(all(target_arch = "arm", feature = "panic_wait"))]
mod panic_wait;
