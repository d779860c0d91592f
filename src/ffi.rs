//! C ABI for Modelica external objects.
//!
//! A Modelica tool links against these symbols and calls the constructors
//! from the `constructor`/`destructor` functions of its `ExternalObject`
//! classes. Errors are reported to the host diagnostics and a null pointer is
//! returned; the message of the last failure stays available through
//! [`bfmu_last_error`].
//!
//! # Safety
//!
//! All pointers handed out here are owned by the caller and must be released
//! with the matching `*_free` function exactly once. A registry pointer must
//! not be used from two threads at the same time.

#![allow(unsafe_code)]

use std::ffi::{CStr, CString, c_char, c_int};
use std::ptr;

use crate::array::GrowableArray;
use crate::error::{RegistryError, Result};
use crate::host::{HostDiagnostics, TracingHost};
use crate::registry::{Registry, ZoneHandle, ZoneRequest};

/// Host function that receives one NUL-terminated diagnostic.
///
/// Matches the shape of `ModelicaMessage`/`ModelicaError` in a Modelica tool.
pub type HostCallback = extern "C" fn(text: *const c_char);

/// Diagnostics delivered to host-provided C callbacks.
///
/// A missing callback falls back to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallbackHost {
    message: Option<HostCallback>,
    error: Option<HostCallback>,
}

impl CallbackHost {
    pub fn new(message: Option<HostCallback>, error: Option<HostCallback>) -> Self {
        Self { message, error }
    }
}

fn deliver(callback: HostCallback, text: &str) {
    // Interior NULs cannot cross the boundary; cut the text there.
    let text = text.split('\0').next().unwrap_or_default();
    if let Ok(c_text) = CString::new(text) {
        callback(c_text.as_ptr());
    }
}

impl HostDiagnostics for CallbackHost {
    fn message(&mut self, text: &str) {
        match self.message {
            Some(cb) => deliver(cb, text),
            None => TracingHost.message(text),
        }
    }

    fn error(&mut self, text: &str) {
        match self.error {
            Some(cb) => deliver(cb, text),
            None => TracingHost.error(text),
        }
    }
}

/// Registry owned by the host, plus the text of its last error.
#[derive(Debug, Default)]
pub struct ExternalRegistry {
    registry: Registry,
    last_error: Option<CString>,
}

impl ExternalRegistry {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            last_error: None,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    fn fail(&mut self, err: &RegistryError) {
        self.registry.report(err);
        self.last_error = CString::new(err.to_string()).ok();
    }
}

/// Reads a NUL-terminated UTF-8 string.
///
/// # Safety
/// `ptr` must be null or point to a valid NUL-terminated string.
unsafe fn read_str<'a>(ptr: *const c_char, what: &'static str) -> Result<&'a str> {
    if ptr.is_null() {
        return Err(RegistryError::InvalidName {
            what,
            reason: "null pointer".to_string(),
        });
    }
    let s = unsafe { CStr::from_ptr(ptr) };
    s.to_str().map_err(|e| RegistryError::InvalidName {
        what,
        reason: e.to_string(),
    })
}

/// Copies `len` strings from a C array of strings.
///
/// # Safety
/// `ptr` must be null or point to `len` valid string pointers.
unsafe fn read_str_array(
    ptr: *const *const c_char,
    len: usize,
    what: &'static str,
) -> Result<Vec<String>> {
    if len == 0 {
        return Ok(Vec::new());
    }
    if ptr.is_null() {
        return Err(RegistryError::InvalidArgument {
            what,
            reason: format!("null array with {len} entries"),
        });
    }
    let items = unsafe { std::slice::from_raw_parts(ptr, len) };
    items
        .iter()
        .map(|&p| unsafe { read_str(p, what) }.map(str::to_string))
        .collect()
}

/// Copies `len` integers from a C array.
///
/// # Safety
/// `ptr` must be null or point to `len` valid integers.
unsafe fn read_int_array(ptr: *const c_int, len: usize, what: &'static str) -> Result<Vec<i32>> {
    if len == 0 {
        return Ok(Vec::new());
    }
    if ptr.is_null() {
        return Err(RegistryError::InvalidArgument {
            what,
            reason: format!("null array with {len} entries"),
        });
    }
    Ok(unsafe { std::slice::from_raw_parts(ptr, len) }.to_vec())
}

/// Creates an empty registry for one model-construction session.
#[unsafe(no_mangle)]
pub extern "C" fn bfmu_registry_new() -> *mut ExternalRegistry {
    Box::into_raw(Box::new(ExternalRegistry::default()))
}

/// Creates an empty registry that reports diagnostics through host callbacks.
///
/// `message` receives the zone initialization messages and `error` the text
/// of every failed call. Either may be null, in which case that channel goes
/// to `tracing`.
#[unsafe(no_mangle)]
pub extern "C" fn bfmu_registry_new_with_host(
    message: Option<HostCallback>,
    error: Option<HostCallback>,
) -> *mut ExternalRegistry {
    let registry = Registry::new().with_host(CallbackHost::new(message, error));
    Box::into_raw(Box::new(ExternalRegistry::new(registry)))
}

/// Releases a registry and every building and zone it owns.
///
/// # Safety
/// `registry` must be null or come from [`bfmu_registry_new`] or
/// [`bfmu_registry_new_with_host`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bfmu_registry_free(registry: *mut ExternalRegistry) {
    if !registry.is_null() {
        drop(unsafe { Box::from_raw(registry) });
    }
}

/// Message of the last failed call on `registry`, or null.
///
/// The string stays valid until the next failing call or until the registry
/// is freed.
///
/// # Safety
/// `registry` must be null or a live registry pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bfmu_last_error(registry: *const ExternalRegistry) -> *const c_char {
    match unsafe { registry.as_ref() } {
        Some(ext) => ext.last_error.as_ref().map_or(ptr::null(), |m| m.as_ptr()),
        None => ptr::null(),
    }
}

/// Constructs the external object of one thermal zone.
///
/// Returns null if the arguments are invalid, if the zone is declared twice
/// for the same FMU instance, or if memory runs out.
///
/// # Safety
/// `registry` must be a live registry pointer. String
/// arguments must be NUL-terminated. Every array must hold at least as many
/// elements as its length argument states.
#[unsafe(no_mangle)]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn bfmu_zone_init(
    registry: *mut ExternalRegistry,
    fmu_name: *const c_char,
    zone_name: *const c_char,
    n_flu_por: c_int,
    var_nam_sen: *const *const c_char,
    n_var_sen: usize,
    var_nam_rec: *const *const c_char,
    n_var_rec: usize,
    val_ref_var_rec: *const c_int,
    n_val_ref_var_rec: usize,
) -> *mut ZoneHandle {
    let Some(ext) = (unsafe { registry.as_mut() }) else {
        tracing::error!("bfmu_zone_init called without a registry");
        return ptr::null_mut();
    };

    let request = (|| -> Result<ZoneRequest> {
        let fmu_name = unsafe { read_str(fmu_name, "FMU instance") }?;
        let zone_name = unsafe { read_str(zone_name, "zone") }?;
        let fluid_ports = usize::try_from(n_flu_por).map_err(|_| RegistryError::InvalidArgument {
            what: "fluid ports",
            reason: format!("negative port count {n_flu_por}"),
        })?;
        let sensors = unsafe { read_str_array(var_nam_sen, n_var_sen, "sensor variables") }?;
        let recorders = unsafe { read_str_array(var_nam_rec, n_var_rec, "recorder variables") }?;
        let recorder_refs = unsafe {
            read_int_array(val_ref_var_rec, n_val_ref_var_rec, "recorder value references")
        }?;
        Ok(ZoneRequest::new(fmu_name, zone_name, fluid_ports)
            .with_sensors(sensors)
            .with_recorders(recorders, recorder_refs))
    })();

    match request.and_then(|r| ext.registry.create_zone(r)) {
        Ok(handle) => Box::into_raw(Box::new(handle)),
        Err(err) => {
            ext.fail(&err);
            ptr::null_mut()
        }
    }
}

/// Releases a zone handle. The zone itself stays in its registry.
///
/// # Safety
/// `zone` must be null or come from [`bfmu_zone_init`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bfmu_zone_free(zone: *mut ZoneHandle) {
    if !zone.is_null() {
        drop(unsafe { Box::from_raw(zone) });
    }
}

/// Creates an empty growable array.
#[unsafe(no_mangle)]
pub extern "C" fn bfmu_init_array() -> *mut GrowableArray {
    Box::into_raw(Box::new(GrowableArray::new()))
}

/// Appends a value. Returns 0 on success and -1 on failure.
///
/// # Safety
/// `array` must be null or a live pointer from [`bfmu_init_array`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bfmu_array_append(array: *mut GrowableArray, value: f64) -> c_int {
    let Some(arr) = (unsafe { array.as_mut() }) else {
        return -1;
    };
    match arr.push(value) {
        Ok(()) => 0,
        Err(err) => {
            tracing::error!("{err}");
            -1
        }
    }
}

/// Number of stored values, or -1 for a null array.
///
/// # Safety
/// `array` must be null or a live pointer from [`bfmu_init_array`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bfmu_array_length(array: *const GrowableArray) -> c_int {
    match unsafe { array.as_ref() } {
        Some(arr) => c_int::try_from(arr.len()).unwrap_or(c_int::MAX),
        None => -1,
    }
}

/// Releases a growable array.
///
/// # Safety
/// `array` must be null or come from [`bfmu_init_array`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bfmu_array_free(array: *mut GrowableArray) {
    if !array.is_null() {
        drop(unsafe { Box::from_raw(array) });
    }
}
