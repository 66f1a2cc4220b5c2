// glapi/src/commands.rs
//
//! The process-wide OpenGL function table.
//!
//! One slot exists per catalogued command. Slots are written only while a
//! load or unload call is in progress and are read-only otherwise; OpenGL
//! contexts are thread-affine, so all of this must happen on the thread that
//! owns the current context. See the crate documentation for the full
//! threading contract.

use crate::types::*;

use std::os::raw::c_void;

/// Identifies one OpenGL command: its symbol name and the core version or
/// extension that introduces it.
///
/// The full catalog is fixed at build time and exposed as [`COMMANDS`].
#[derive(Clone, Copy, Debug)]
pub struct CommandDescriptor {
    /// The symbol name, e.g. `"glClear"`.
    pub name: &'static str,
    /// The introducing feature, e.g. `"GL_VERSION_1_0"` or
    /// `"GL_EXT_framebuffer_object"`.
    pub feature: &'static str,
}

/// A function-table slot.
///
/// An unloaded slot points at [`missing_fn_panic`] rather than null so that
/// calling an unresolved entry point fails loudly instead of jumping through
/// a null pointer.
pub(crate) struct FnPtr {
    /// The address used when the entry point is called.
    pub(crate) f: *const c_void,
    /// True if `f` came from a resolver during the most recent load.
    pub(crate) is_loaded: bool,
}

impl FnPtr {
    pub(crate) const UNLOADED: FnPtr = FnPtr {
        f: missing_fn_panic as *const c_void,
        is_loaded: false,
    };

    pub(crate) fn new(ptr: *const c_void) -> FnPtr {
        if ptr.is_null() {
            FnPtr::UNLOADED
        } else {
            FnPtr {
                f: ptr,
                is_loaded: true,
            }
        }
    }
}

#[inline(never)]
fn missing_fn_panic() -> ! {
    panic!("OpenGL function called before it was loaded")
}

// Buffer masks.
pub const DEPTH_BUFFER_BIT: GLenum = 0x0000_0100;
pub const STENCIL_BUFFER_BIT: GLenum = 0x0000_0400;
pub const COLOR_BUFFER_BIT: GLenum = 0x0000_4000;

// Booleans.
pub const FALSE: GLboolean = 0;
pub const TRUE: GLboolean = 1;

// Primitive types.
pub const POINTS: GLenum = 0x0000;
pub const LINES: GLenum = 0x0001;
pub const LINE_LOOP: GLenum = 0x0002;
pub const LINE_STRIP: GLenum = 0x0003;
pub const TRIANGLES: GLenum = 0x0004;
pub const TRIANGLE_STRIP: GLenum = 0x0005;
pub const TRIANGLE_FAN: GLenum = 0x0006;
pub const PATCHES: GLenum = 0x000e;

// Comparison functions.
pub const NEVER: GLenum = 0x0200;
pub const LESS: GLenum = 0x0201;
pub const EQUAL: GLenum = 0x0202;
pub const LEQUAL: GLenum = 0x0203;
pub const GREATER: GLenum = 0x0204;
pub const NOTEQUAL: GLenum = 0x0205;
pub const GEQUAL: GLenum = 0x0206;
pub const ALWAYS: GLenum = 0x0207;

// Blend factors.
pub const ZERO: GLenum = 0;
pub const ONE: GLenum = 1;
pub const SRC_COLOR: GLenum = 0x0300;
pub const ONE_MINUS_SRC_COLOR: GLenum = 0x0301;
pub const SRC_ALPHA: GLenum = 0x0302;
pub const ONE_MINUS_SRC_ALPHA: GLenum = 0x0303;
pub const DST_ALPHA: GLenum = 0x0304;
pub const ONE_MINUS_DST_ALPHA: GLenum = 0x0305;
pub const DST_COLOR: GLenum = 0x0306;
pub const ONE_MINUS_DST_COLOR: GLenum = 0x0307;
pub const SRC_ALPHA_SATURATE: GLenum = 0x0308;
pub const FUNC_ADD: GLenum = 0x8006;
pub const FUNC_SUBTRACT: GLenum = 0x800a;
pub const FUNC_REVERSE_SUBTRACT: GLenum = 0x800b;

// Errors.
pub const NO_ERROR: GLenum = 0;
pub const INVALID_ENUM: GLenum = 0x0500;
pub const INVALID_VALUE: GLenum = 0x0501;
pub const INVALID_OPERATION: GLenum = 0x0502;
pub const STACK_OVERFLOW: GLenum = 0x0503;
pub const STACK_UNDERFLOW: GLenum = 0x0504;
pub const OUT_OF_MEMORY: GLenum = 0x0505;
pub const INVALID_FRAMEBUFFER_OPERATION: GLenum = 0x0506;

// Face culling and winding.
pub const FRONT: GLenum = 0x0404;
pub const BACK: GLenum = 0x0405;
pub const FRONT_AND_BACK: GLenum = 0x0408;
pub const CW: GLenum = 0x0900;
pub const CCW: GLenum = 0x0901;

// Capabilities.
pub const LINE_SMOOTH: GLenum = 0x0b20;
pub const CULL_FACE: GLenum = 0x0b44;
pub const DEPTH_TEST: GLenum = 0x0b71;
pub const STENCIL_TEST: GLenum = 0x0b90;
pub const DITHER: GLenum = 0x0bd0;
pub const BLEND: GLenum = 0x0be2;
pub const SCISSOR_TEST: GLenum = 0x0c11;
pub const POLYGON_OFFSET_FILL: GLenum = 0x8037;
pub const MULTISAMPLE: GLenum = 0x809d;
pub const SAMPLE_ALPHA_TO_COVERAGE: GLenum = 0x809e;
pub const SAMPLE_COVERAGE: GLenum = 0x80a0;
pub const PROGRAM_POINT_SIZE: GLenum = 0x8642;
pub const DEBUG_OUTPUT_SYNCHRONOUS: GLenum = 0x8242;
pub const DEBUG_OUTPUT: GLenum = 0x92e0;
pub const FRAMEBUFFER_SRGB: GLenum = 0x8db9;

// Simple state queries.
pub const VIEWPORT: GLenum = 0x0ba2;
pub const UNPACK_ROW_LENGTH: GLenum = 0x0cf2;
pub const UNPACK_ALIGNMENT: GLenum = 0x0cf5;
pub const PACK_ALIGNMENT: GLenum = 0x0d05;
pub const MAX_TEXTURE_SIZE: GLenum = 0x0d33;
pub const VENDOR: GLenum = 0x1f00;
pub const RENDERER: GLenum = 0x1f01;
pub const VERSION: GLenum = 0x1f02;
pub const EXTENSIONS: GLenum = 0x1f03;
pub const SHADING_LANGUAGE_VERSION: GLenum = 0x8b8c;
pub const MAJOR_VERSION: GLenum = 0x821b;
pub const MINOR_VERSION: GLenum = 0x821c;
pub const NUM_EXTENSIONS: GLenum = 0x821d;
pub const CONTEXT_FLAGS: GLenum = 0x821e;
pub const CONTEXT_PROFILE_MASK: GLenum = 0x9126;
pub const CONTEXT_CORE_PROFILE_BIT: GLenum = 0x0000_0001;
pub const CONTEXT_COMPATIBILITY_PROFILE_BIT: GLenum = 0x0000_0002;

// Scalar types.
pub const BYTE: GLenum = 0x1400;
pub const UNSIGNED_BYTE: GLenum = 0x1401;
pub const SHORT: GLenum = 0x1402;
pub const UNSIGNED_SHORT: GLenum = 0x1403;
pub const INT: GLenum = 0x1404;
pub const UNSIGNED_INT: GLenum = 0x1405;
pub const FLOAT: GLenum = 0x1406;
pub const DOUBLE: GLenum = 0x140a;
pub const HALF_FLOAT: GLenum = 0x140b;
pub const UNSIGNED_INT_24_8: GLenum = 0x84fa;

// Pixel formats.
pub const DEPTH_COMPONENT: GLenum = 0x1902;
pub const RED: GLenum = 0x1903;
pub const GREEN: GLenum = 0x1904;
pub const BLUE: GLenum = 0x1905;
pub const ALPHA: GLenum = 0x1906;
pub const RGB: GLenum = 0x1907;
pub const RGBA: GLenum = 0x1908;
pub const BGR: GLenum = 0x80e0;
pub const BGRA: GLenum = 0x80e1;
pub const RG: GLenum = 0x8227;
pub const DEPTH_STENCIL: GLenum = 0x84f9;

// Sized internal formats.
pub const RGB8: GLenum = 0x8051;
pub const RGBA8: GLenum = 0x8058;
pub const DEPTH_COMPONENT16: GLenum = 0x81a5;
pub const DEPTH_COMPONENT24: GLenum = 0x81a6;
pub const R8: GLenum = 0x8229;
pub const RG8: GLenum = 0x822b;
pub const RGBA32F: GLenum = 0x8814;
pub const RGBA16F: GLenum = 0x881a;
pub const DEPTH24_STENCIL8: GLenum = 0x88f0;
pub const SRGB8: GLenum = 0x8c41;
pub const SRGB8_ALPHA8: GLenum = 0x8c43;

// Texture targets and parameters.
pub const TEXTURE_1D: GLenum = 0x0de0;
pub const TEXTURE_2D: GLenum = 0x0de1;
pub const TEXTURE_3D: GLenum = 0x806f;
pub const TEXTURE_CUBE_MAP: GLenum = 0x8513;
pub const TEXTURE_2D_ARRAY: GLenum = 0x8c1a;
pub const TEXTURE_2D_MULTISAMPLE: GLenum = 0x9100;
pub const TEXTURE0: GLenum = 0x84c0;
pub const TEXTURE_MAG_FILTER: GLenum = 0x2800;
pub const TEXTURE_MIN_FILTER: GLenum = 0x2801;
pub const TEXTURE_WRAP_S: GLenum = 0x2802;
pub const TEXTURE_WRAP_T: GLenum = 0x2803;
pub const TEXTURE_WRAP_R: GLenum = 0x8072;
pub const NEAREST: GLenum = 0x2600;
pub const LINEAR: GLenum = 0x2601;
pub const NEAREST_MIPMAP_NEAREST: GLenum = 0x2700;
pub const LINEAR_MIPMAP_NEAREST: GLenum = 0x2701;
pub const NEAREST_MIPMAP_LINEAR: GLenum = 0x2702;
pub const LINEAR_MIPMAP_LINEAR: GLenum = 0x2703;
pub const REPEAT: GLenum = 0x2901;
pub const CLAMP_TO_EDGE: GLenum = 0x812f;
pub const MIRRORED_REPEAT: GLenum = 0x8370;

// Buffer objects.
pub const ARRAY_BUFFER: GLenum = 0x8892;
pub const ELEMENT_ARRAY_BUFFER: GLenum = 0x8893;
pub const ARRAY_BUFFER_BINDING: GLenum = 0x8894;
pub const PIXEL_PACK_BUFFER: GLenum = 0x88eb;
pub const PIXEL_UNPACK_BUFFER: GLenum = 0x88ec;
pub const UNIFORM_BUFFER: GLenum = 0x8a11;
pub const COPY_READ_BUFFER: GLenum = 0x8f36;
pub const COPY_WRITE_BUFFER: GLenum = 0x8f37;
pub const SHADER_STORAGE_BUFFER: GLenum = 0x90d2;
pub const READ_ONLY: GLenum = 0x88b8;
pub const WRITE_ONLY: GLenum = 0x88b9;
pub const READ_WRITE: GLenum = 0x88ba;
pub const STREAM_DRAW: GLenum = 0x88e0;
pub const STATIC_DRAW: GLenum = 0x88e4;
pub const DYNAMIC_DRAW: GLenum = 0x88e8;
pub const MAP_READ_BIT: GLbitfield = 0x0001;
pub const MAP_WRITE_BIT: GLbitfield = 0x0002;
pub const MAP_PERSISTENT_BIT: GLbitfield = 0x0040;
pub const DYNAMIC_STORAGE_BIT: GLbitfield = 0x0100;

// Shaders and programs.
pub const FRAGMENT_SHADER: GLenum = 0x8b30;
pub const VERTEX_SHADER: GLenum = 0x8b31;
pub const GEOMETRY_SHADER: GLenum = 0x8dd9;
pub const TESS_EVALUATION_SHADER: GLenum = 0x8e87;
pub const TESS_CONTROL_SHADER: GLenum = 0x8e88;
pub const COMPUTE_SHADER: GLenum = 0x91b9;
pub const COMPILE_STATUS: GLenum = 0x8b81;
pub const LINK_STATUS: GLenum = 0x8b82;
pub const VALIDATE_STATUS: GLenum = 0x8b83;
pub const INFO_LOG_LENGTH: GLenum = 0x8b84;
pub const CURRENT_PROGRAM: GLenum = 0x8b8d;

// Framebuffer objects.
pub const DRAW_FRAMEBUFFER_BINDING: GLenum = 0x8ca6;
pub const FRAMEBUFFER_BINDING: GLenum = 0x8ca6;
pub const READ_FRAMEBUFFER: GLenum = 0x8ca8;
pub const DRAW_FRAMEBUFFER: GLenum = 0x8ca9;
pub const READ_FRAMEBUFFER_BINDING: GLenum = 0x8caa;
pub const FRAMEBUFFER_COMPLETE: GLenum = 0x8cd5;
pub const COLOR_ATTACHMENT0: GLenum = 0x8ce0;
pub const DEPTH_ATTACHMENT: GLenum = 0x8d00;
pub const STENCIL_ATTACHMENT: GLenum = 0x8d20;
pub const DEPTH_STENCIL_ATTACHMENT: GLenum = 0x821a;
pub const FRAMEBUFFER: GLenum = 0x8d40;
pub const RENDERBUFFER: GLenum = 0x8d41;

// Sync objects.
pub const SYNC_GPU_COMMANDS_COMPLETE: GLenum = 0x9117;
pub const ALREADY_SIGNALED: GLenum = 0x911a;
pub const TIMEOUT_EXPIRED: GLenum = 0x911b;
pub const CONDITION_SATISFIED: GLenum = 0x911c;
pub const WAIT_FAILED: GLenum = 0x911d;
pub const SYNC_FLUSH_COMMANDS_BIT: GLbitfield = 0x0000_0001;
pub const TIMEOUT_IGNORED: GLuint64 = 0xffff_ffff_ffff_ffff;

// Debug output.
pub const DONT_CARE: GLenum = 0x1100;
pub const DEBUG_SEVERITY_HIGH: GLenum = 0x9146;
pub const DEBUG_SEVERITY_MEDIUM: GLenum = 0x9147;
pub const DEBUG_SEVERITY_LOW: GLenum = 0x9148;

gl_functions! {
    GL_VERSION_1_0 {
        fn CullFace(mode: GLenum) -> ();
        fn FrontFace(mode: GLenum) -> ();
        fn Hint(target: GLenum, mode: GLenum) -> ();
        fn LineWidth(width: GLfloat) -> ();
        fn PointSize(size: GLfloat) -> ();
        fn PolygonMode(face: GLenum, mode: GLenum) -> ();
        fn Scissor(x: GLint, y: GLint, width: GLsizei, height: GLsizei) -> ();
        fn TexParameterf(target: GLenum, pname: GLenum, param: GLfloat) -> ();
        fn TexParameterfv(target: GLenum, pname: GLenum, params: *const GLfloat) -> ();
        fn TexParameteri(target: GLenum, pname: GLenum, param: GLint) -> ();
        fn TexParameteriv(target: GLenum, pname: GLenum, params: *const GLint) -> ();
        fn TexImage1D(target: GLenum, level: GLint, internalformat: GLint, width: GLsizei,
                      border: GLint, format: GLenum, type_: GLenum,
                      pixels: *const GLvoid) -> ();
        fn TexImage2D(target: GLenum, level: GLint, internalformat: GLint, width: GLsizei,
                      height: GLsizei, border: GLint, format: GLenum, type_: GLenum,
                      pixels: *const GLvoid) -> ();
        fn DrawBuffer(buf: GLenum) -> ();
        fn Clear(mask: GLbitfield) -> ();
        fn ClearColor(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) -> ();
        fn ClearStencil(s: GLint) -> ();
        fn ClearDepth(depth: GLdouble) -> ();
        fn StencilMask(mask: GLuint) -> ();
        fn ColorMask(red: GLboolean, green: GLboolean, blue: GLboolean,
                     alpha: GLboolean) -> ();
        fn DepthMask(flag: GLboolean) -> ();
        fn Disable(cap: GLenum) -> ();
        fn Enable(cap: GLenum) -> ();
        fn Finish() -> ();
        fn Flush() -> ();
        fn BlendFunc(sfactor: GLenum, dfactor: GLenum) -> ();
        fn LogicOp(opcode: GLenum) -> ();
        fn StencilFunc(func: GLenum, ref_: GLint, mask: GLuint) -> ();
        fn StencilOp(fail: GLenum, zfail: GLenum, zpass: GLenum) -> ();
        fn DepthFunc(func: GLenum) -> ();
        fn PixelStoref(pname: GLenum, param: GLfloat) -> ();
        fn PixelStorei(pname: GLenum, param: GLint) -> ();
        fn ReadBuffer(src: GLenum) -> ();
        fn ReadPixels(x: GLint, y: GLint, width: GLsizei, height: GLsizei, format: GLenum,
                      type_: GLenum, pixels: *mut GLvoid) -> ();
        fn GetBooleanv(pname: GLenum, data: *mut GLboolean) -> ();
        fn GetDoublev(pname: GLenum, data: *mut GLdouble) -> ();
        fn GetError() -> GLenum;
        fn GetFloatv(pname: GLenum, data: *mut GLfloat) -> ();
        fn GetIntegerv(pname: GLenum, data: *mut GLint) -> ();
        fn GetString(name: GLenum) -> *const GLubyte;
        fn GetTexImage(target: GLenum, level: GLint, format: GLenum, type_: GLenum,
                       pixels: *mut GLvoid) -> ();
        fn GetTexParameterfv(target: GLenum, pname: GLenum, params: *mut GLfloat) -> ();
        fn GetTexParameteriv(target: GLenum, pname: GLenum, params: *mut GLint) -> ();
        fn GetTexLevelParameterfv(target: GLenum, level: GLint, pname: GLenum,
                                  params: *mut GLfloat) -> ();
        fn GetTexLevelParameteriv(target: GLenum, level: GLint, pname: GLenum,
                                  params: *mut GLint) -> ();
        fn IsEnabled(cap: GLenum) -> GLboolean;
        fn DepthRange(n: GLdouble, f: GLdouble) -> ();
        fn Viewport(x: GLint, y: GLint, width: GLsizei, height: GLsizei) -> ();
    }

    GL_VERSION_1_1 {
        fn DrawArrays(mode: GLenum, first: GLint, count: GLsizei) -> ();
        fn DrawElements(mode: GLenum, count: GLsizei, type_: GLenum,
                        indices: *const GLvoid) -> ();
        fn GetPointerv(pname: GLenum, params: *mut *mut GLvoid) -> ();
        fn PolygonOffset(factor: GLfloat, units: GLfloat) -> ();
        fn CopyTexImage1D(target: GLenum, level: GLint, internalformat: GLenum, x: GLint,
                          y: GLint, width: GLsizei, border: GLint) -> ();
        fn CopyTexImage2D(target: GLenum, level: GLint, internalformat: GLenum, x: GLint,
                          y: GLint, width: GLsizei, height: GLsizei, border: GLint) -> ();
        fn CopyTexSubImage1D(target: GLenum, level: GLint, xoffset: GLint, x: GLint,
                             y: GLint, width: GLsizei) -> ();
        fn CopyTexSubImage2D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint,
                             x: GLint, y: GLint, width: GLsizei, height: GLsizei) -> ();
        fn TexSubImage1D(target: GLenum, level: GLint, xoffset: GLint, width: GLsizei,
                         format: GLenum, type_: GLenum, pixels: *const GLvoid) -> ();
        fn TexSubImage2D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint,
                         width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum,
                         pixels: *const GLvoid) -> ();
        fn BindTexture(target: GLenum, texture: GLuint) -> ();
        fn DeleteTextures(n: GLsizei, textures: *const GLuint) -> ();
        fn GenTextures(n: GLsizei, textures: *mut GLuint) -> ();
        fn IsTexture(texture: GLuint) -> GLboolean;
    }

    GL_VERSION_1_2 {
        fn DrawRangeElements(mode: GLenum, start: GLuint, end: GLuint, count: GLsizei,
                             type_: GLenum, indices: *const GLvoid) -> ();
        fn TexImage3D(target: GLenum, level: GLint, internalformat: GLint, width: GLsizei,
                      height: GLsizei, depth: GLsizei, border: GLint, format: GLenum,
                      type_: GLenum, pixels: *const GLvoid) -> ();
        fn TexSubImage3D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint,
                         zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei,
                         format: GLenum, type_: GLenum, pixels: *const GLvoid) -> ();
        fn CopyTexSubImage3D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint,
                             zoffset: GLint, x: GLint, y: GLint, width: GLsizei,
                             height: GLsizei) -> ();
    }

    GL_VERSION_1_3 {
        fn ActiveTexture(texture: GLenum) -> ();
        fn SampleCoverage(value: GLfloat, invert: GLboolean) -> ();
        fn CompressedTexImage3D(target: GLenum, level: GLint, internalformat: GLenum,
                                width: GLsizei, height: GLsizei, depth: GLsizei,
                                border: GLint, imageSize: GLsizei,
                                data: *const GLvoid) -> ();
        fn CompressedTexImage2D(target: GLenum, level: GLint, internalformat: GLenum,
                                width: GLsizei, height: GLsizei, border: GLint,
                                imageSize: GLsizei, data: *const GLvoid) -> ();
        fn CompressedTexImage1D(target: GLenum, level: GLint, internalformat: GLenum,
                                width: GLsizei, border: GLint, imageSize: GLsizei,
                                data: *const GLvoid) -> ();
        fn CompressedTexSubImage3D(target: GLenum, level: GLint, xoffset: GLint,
                                   yoffset: GLint, zoffset: GLint, width: GLsizei,
                                   height: GLsizei, depth: GLsizei, format: GLenum,
                                   imageSize: GLsizei, data: *const GLvoid) -> ();
        fn CompressedTexSubImage2D(target: GLenum, level: GLint, xoffset: GLint,
                                   yoffset: GLint, width: GLsizei, height: GLsizei,
                                   format: GLenum, imageSize: GLsizei,
                                   data: *const GLvoid) -> ();
        fn CompressedTexSubImage1D(target: GLenum, level: GLint, xoffset: GLint,
                                   width: GLsizei, format: GLenum, imageSize: GLsizei,
                                   data: *const GLvoid) -> ();
        fn GetCompressedTexImage(target: GLenum, level: GLint, img: *mut GLvoid) -> ();
    }

    GL_VERSION_1_4 {
        fn BlendFuncSeparate(sfactorRGB: GLenum, dfactorRGB: GLenum, sfactorAlpha: GLenum,
                             dfactorAlpha: GLenum) -> ();
        fn MultiDrawArrays(mode: GLenum, first: *const GLint, count: *const GLsizei,
                           drawcount: GLsizei) -> ();
        fn MultiDrawElements(mode: GLenum, count: *const GLsizei, type_: GLenum,
                             indices: *const *const GLvoid, drawcount: GLsizei) -> ();
        fn PointParameterf(pname: GLenum, param: GLfloat) -> ();
        fn PointParameterfv(pname: GLenum, params: *const GLfloat) -> ();
        fn PointParameteri(pname: GLenum, param: GLint) -> ();
        fn PointParameteriv(pname: GLenum, params: *const GLint) -> ();
        fn BlendColor(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) -> ();
        fn BlendEquation(mode: GLenum) -> ();
    }

    GL_VERSION_1_5 {
        fn GenQueries(n: GLsizei, ids: *mut GLuint) -> ();
        fn DeleteQueries(n: GLsizei, ids: *const GLuint) -> ();
        fn IsQuery(id: GLuint) -> GLboolean;
        fn BeginQuery(target: GLenum, id: GLuint) -> ();
        fn EndQuery(target: GLenum) -> ();
        fn GetQueryiv(target: GLenum, pname: GLenum, params: *mut GLint) -> ();
        fn GetQueryObjectiv(id: GLuint, pname: GLenum, params: *mut GLint) -> ();
        fn GetQueryObjectuiv(id: GLuint, pname: GLenum, params: *mut GLuint) -> ();
        fn BindBuffer(target: GLenum, buffer: GLuint) -> ();
        fn DeleteBuffers(n: GLsizei, buffers: *const GLuint) -> ();
        fn GenBuffers(n: GLsizei, buffers: *mut GLuint) -> ();
        fn IsBuffer(buffer: GLuint) -> GLboolean;
        fn BufferData(target: GLenum, size: GLsizeiptr, data: *const GLvoid,
                      usage: GLenum) -> ();
        fn BufferSubData(target: GLenum, offset: GLintptr, size: GLsizeiptr,
                         data: *const GLvoid) -> ();
        fn GetBufferSubData(target: GLenum, offset: GLintptr, size: GLsizeiptr,
                            data: *mut GLvoid) -> ();
        fn MapBuffer(target: GLenum, access: GLenum) -> *mut GLvoid;
        fn UnmapBuffer(target: GLenum) -> GLboolean;
        fn GetBufferParameteriv(target: GLenum, pname: GLenum, params: *mut GLint) -> ();
        fn GetBufferPointerv(target: GLenum, pname: GLenum,
                             params: *mut *mut GLvoid) -> ();
    }

    GL_VERSION_2_0 {
        fn BlendEquationSeparate(modeRGB: GLenum, modeAlpha: GLenum) -> ();
        fn DrawBuffers(n: GLsizei, bufs: *const GLenum) -> ();
        fn StencilOpSeparate(face: GLenum, sfail: GLenum, dpfail: GLenum,
                             dppass: GLenum) -> ();
        fn StencilFuncSeparate(face: GLenum, func: GLenum, ref_: GLint, mask: GLuint) -> ();
        fn StencilMaskSeparate(face: GLenum, mask: GLuint) -> ();
        fn AttachShader(program: GLuint, shader: GLuint) -> ();
        fn BindAttribLocation(program: GLuint, index: GLuint, name: *const GLchar) -> ();
        fn CompileShader(shader: GLuint) -> ();
        fn CreateProgram() -> GLuint;
        fn CreateShader(type_: GLenum) -> GLuint;
        fn DeleteProgram(program: GLuint) -> ();
        fn DeleteShader(shader: GLuint) -> ();
        fn DetachShader(program: GLuint, shader: GLuint) -> ();
        fn DisableVertexAttribArray(index: GLuint) -> ();
        fn EnableVertexAttribArray(index: GLuint) -> ();
        fn GetActiveAttrib(program: GLuint, index: GLuint, bufSize: GLsizei,
                           length: *mut GLsizei, size: *mut GLint, type_: *mut GLenum,
                           name: *mut GLchar) -> ();
        fn GetActiveUniform(program: GLuint, index: GLuint, bufSize: GLsizei,
                            length: *mut GLsizei, size: *mut GLint, type_: *mut GLenum,
                            name: *mut GLchar) -> ();
        fn GetAttachedShaders(program: GLuint, maxCount: GLsizei, count: *mut GLsizei,
                              shaders: *mut GLuint) -> ();
        fn GetAttribLocation(program: GLuint, name: *const GLchar) -> GLint;
        fn GetProgramiv(program: GLuint, pname: GLenum, params: *mut GLint) -> ();
        fn GetProgramInfoLog(program: GLuint, bufSize: GLsizei, length: *mut GLsizei,
                             infoLog: *mut GLchar) -> ();
        fn GetShaderiv(shader: GLuint, pname: GLenum, params: *mut GLint) -> ();
        fn GetShaderInfoLog(shader: GLuint, bufSize: GLsizei, length: *mut GLsizei,
                            infoLog: *mut GLchar) -> ();
        fn GetShaderSource(shader: GLuint, bufSize: GLsizei, length: *mut GLsizei,
                           source: *mut GLchar) -> ();
        fn GetUniformLocation(program: GLuint, name: *const GLchar) -> GLint;
        fn GetUniformfv(program: GLuint, location: GLint, params: *mut GLfloat) -> ();
        fn GetUniformiv(program: GLuint, location: GLint, params: *mut GLint) -> ();
        fn GetVertexAttribPointerv(index: GLuint, pname: GLenum,
                                   pointer: *mut *mut GLvoid) -> ();
        fn IsProgram(program: GLuint) -> GLboolean;
        fn IsShader(shader: GLuint) -> GLboolean;
        fn LinkProgram(program: GLuint) -> ();
        fn ShaderSource(shader: GLuint, count: GLsizei, string: *const *const GLchar,
                        length: *const GLint) -> ();
        fn UseProgram(program: GLuint) -> ();
        fn Uniform1f(location: GLint, v0: GLfloat) -> ();
        fn Uniform2f(location: GLint, v0: GLfloat, v1: GLfloat) -> ();
        fn Uniform3f(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat) -> ();
        fn Uniform4f(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat,
                     v3: GLfloat) -> ();
        fn Uniform1i(location: GLint, v0: GLint) -> ();
        fn Uniform2i(location: GLint, v0: GLint, v1: GLint) -> ();
        fn Uniform3i(location: GLint, v0: GLint, v1: GLint, v2: GLint) -> ();
        fn Uniform4i(location: GLint, v0: GLint, v1: GLint, v2: GLint, v3: GLint) -> ();
        fn Uniform1fv(location: GLint, count: GLsizei, value: *const GLfloat) -> ();
        fn Uniform2fv(location: GLint, count: GLsizei, value: *const GLfloat) -> ();
        fn Uniform3fv(location: GLint, count: GLsizei, value: *const GLfloat) -> ();
        fn Uniform4fv(location: GLint, count: GLsizei, value: *const GLfloat) -> ();
        fn Uniform1iv(location: GLint, count: GLsizei, value: *const GLint) -> ();
        fn Uniform2iv(location: GLint, count: GLsizei, value: *const GLint) -> ();
        fn Uniform3iv(location: GLint, count: GLsizei, value: *const GLint) -> ();
        fn Uniform4iv(location: GLint, count: GLsizei, value: *const GLint) -> ();
        fn UniformMatrix2fv(location: GLint, count: GLsizei, transpose: GLboolean,
                            value: *const GLfloat) -> ();
        fn UniformMatrix3fv(location: GLint, count: GLsizei, transpose: GLboolean,
                            value: *const GLfloat) -> ();
        fn UniformMatrix4fv(location: GLint, count: GLsizei, transpose: GLboolean,
                            value: *const GLfloat) -> ();
        fn ValidateProgram(program: GLuint) -> ();
        fn VertexAttrib1f(index: GLuint, x: GLfloat) -> ();
        fn VertexAttrib2f(index: GLuint, x: GLfloat, y: GLfloat) -> ();
        fn VertexAttrib3f(index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat) -> ();
        fn VertexAttrib4f(index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat,
                          w: GLfloat) -> ();
        fn VertexAttribPointer(index: GLuint, size: GLint, type_: GLenum,
                               normalized: GLboolean, stride: GLsizei,
                               pointer: *const GLvoid) -> ();
    }

    GL_VERSION_2_1 {
        fn UniformMatrix2x3fv(location: GLint, count: GLsizei, transpose: GLboolean,
                              value: *const GLfloat) -> ();
        fn UniformMatrix3x2fv(location: GLint, count: GLsizei, transpose: GLboolean,
                              value: *const GLfloat) -> ();
        fn UniformMatrix2x4fv(location: GLint, count: GLsizei, transpose: GLboolean,
                              value: *const GLfloat) -> ();
        fn UniformMatrix4x2fv(location: GLint, count: GLsizei, transpose: GLboolean,
                              value: *const GLfloat) -> ();
        fn UniformMatrix3x4fv(location: GLint, count: GLsizei, transpose: GLboolean,
                              value: *const GLfloat) -> ();
        fn UniformMatrix4x3fv(location: GLint, count: GLsizei, transpose: GLboolean,
                              value: *const GLfloat) -> ();
    }

    GL_VERSION_3_0 {
        fn ColorMaski(index: GLuint, r: GLboolean, g: GLboolean, b: GLboolean,
                      a: GLboolean) -> ();
        fn GetBooleani_v(target: GLenum, index: GLuint, data: *mut GLboolean) -> ();
        fn GetIntegeri_v(target: GLenum, index: GLuint, data: *mut GLint) -> ();
        fn Enablei(target: GLenum, index: GLuint) -> ();
        fn Disablei(target: GLenum, index: GLuint) -> ();
        fn IsEnabledi(target: GLenum, index: GLuint) -> GLboolean;
        fn BeginTransformFeedback(primitiveMode: GLenum) -> ();
        fn EndTransformFeedback() -> ();
        fn BindBufferRange(target: GLenum, index: GLuint, buffer: GLuint, offset: GLintptr,
                           size: GLsizeiptr) -> ();
        fn BindBufferBase(target: GLenum, index: GLuint, buffer: GLuint) -> ();
        fn TransformFeedbackVaryings(program: GLuint, count: GLsizei,
                                     varyings: *const *const GLchar,
                                     bufferMode: GLenum) -> ();
        fn VertexAttribIPointer(index: GLuint, size: GLint, type_: GLenum, stride: GLsizei,
                                pointer: *const GLvoid) -> ();
        fn GetUniformuiv(program: GLuint, location: GLint, params: *mut GLuint) -> ();
        fn BindFragDataLocation(program: GLuint, color: GLuint, name: *const GLchar) -> ();
        fn GetFragDataLocation(program: GLuint, name: *const GLchar) -> GLint;
        fn Uniform1ui(location: GLint, v0: GLuint) -> ();
        fn Uniform2ui(location: GLint, v0: GLuint, v1: GLuint) -> ();
        fn Uniform3ui(location: GLint, v0: GLuint, v1: GLuint, v2: GLuint) -> ();
        fn Uniform4ui(location: GLint, v0: GLuint, v1: GLuint, v2: GLuint,
                      v3: GLuint) -> ();
        fn Uniform1uiv(location: GLint, count: GLsizei, value: *const GLuint) -> ();
        fn Uniform2uiv(location: GLint, count: GLsizei, value: *const GLuint) -> ();
        fn Uniform3uiv(location: GLint, count: GLsizei, value: *const GLuint) -> ();
        fn Uniform4uiv(location: GLint, count: GLsizei, value: *const GLuint) -> ();
        fn ClearBufferiv(buffer: GLenum, drawbuffer: GLint, value: *const GLint) -> ();
        fn ClearBufferuiv(buffer: GLenum, drawbuffer: GLint, value: *const GLuint) -> ();
        fn ClearBufferfv(buffer: GLenum, drawbuffer: GLint, value: *const GLfloat) -> ();
        fn ClearBufferfi(buffer: GLenum, drawbuffer: GLint, depth: GLfloat,
                         stencil: GLint) -> ();
        fn GetStringi(name: GLenum, index: GLuint) -> *const GLubyte;
        fn IsRenderbuffer(renderbuffer: GLuint) -> GLboolean;
        fn BindRenderbuffer(target: GLenum, renderbuffer: GLuint) -> ();
        fn DeleteRenderbuffers(n: GLsizei, renderbuffers: *const GLuint) -> ();
        fn GenRenderbuffers(n: GLsizei, renderbuffers: *mut GLuint) -> ();
        fn RenderbufferStorage(target: GLenum, internalformat: GLenum, width: GLsizei,
                               height: GLsizei) -> ();
        fn GetRenderbufferParameteriv(target: GLenum, pname: GLenum,
                                      params: *mut GLint) -> ();
        fn IsFramebuffer(framebuffer: GLuint) -> GLboolean;
        fn BindFramebuffer(target: GLenum, framebuffer: GLuint) -> ();
        fn DeleteFramebuffers(n: GLsizei, framebuffers: *const GLuint) -> ();
        fn GenFramebuffers(n: GLsizei, framebuffers: *mut GLuint) -> ();
        fn CheckFramebufferStatus(target: GLenum) -> GLenum;
        fn FramebufferTexture1D(target: GLenum, attachment: GLenum, textarget: GLenum,
                                texture: GLuint, level: GLint) -> ();
        fn FramebufferTexture2D(target: GLenum, attachment: GLenum, textarget: GLenum,
                                texture: GLuint, level: GLint) -> ();
        fn FramebufferTexture3D(target: GLenum, attachment: GLenum, textarget: GLenum,
                                texture: GLuint, level: GLint, zoffset: GLint) -> ();
        fn FramebufferRenderbuffer(target: GLenum, attachment: GLenum,
                                   renderbuffertarget: GLenum, renderbuffer: GLuint) -> ();
        fn GetFramebufferAttachmentParameteriv(target: GLenum, attachment: GLenum,
                                               pname: GLenum, params: *mut GLint) -> ();
        fn GenerateMipmap(target: GLenum) -> ();
        fn BlitFramebuffer(srcX0: GLint, srcY0: GLint, srcX1: GLint, srcY1: GLint,
                           dstX0: GLint, dstY0: GLint, dstX1: GLint, dstY1: GLint,
                           mask: GLbitfield, filter: GLenum) -> ();
        fn RenderbufferStorageMultisample(target: GLenum, samples: GLsizei,
                                          internalformat: GLenum, width: GLsizei,
                                          height: GLsizei) -> ();
        fn FramebufferTextureLayer(target: GLenum, attachment: GLenum, texture: GLuint,
                                   level: GLint, layer: GLint) -> ();
        fn MapBufferRange(target: GLenum, offset: GLintptr, length: GLsizeiptr,
                          access: GLbitfield) -> *mut GLvoid;
        fn FlushMappedBufferRange(target: GLenum, offset: GLintptr,
                                  length: GLsizeiptr) -> ();
        fn BindVertexArray(array: GLuint) -> ();
        fn DeleteVertexArrays(n: GLsizei, arrays: *const GLuint) -> ();
        fn GenVertexArrays(n: GLsizei, arrays: *mut GLuint) -> ();
        fn IsVertexArray(array: GLuint) -> GLboolean;
    }

    GL_VERSION_3_1 {
        fn DrawArraysInstanced(mode: GLenum, first: GLint, count: GLsizei,
                               instancecount: GLsizei) -> ();
        fn DrawElementsInstanced(mode: GLenum, count: GLsizei, type_: GLenum,
                                 indices: *const GLvoid, instancecount: GLsizei) -> ();
        fn TexBuffer(target: GLenum, internalformat: GLenum, buffer: GLuint) -> ();
        fn PrimitiveRestartIndex(index: GLuint) -> ();
        fn CopyBufferSubData(readTarget: GLenum, writeTarget: GLenum, readOffset: GLintptr,
                             writeOffset: GLintptr, size: GLsizeiptr) -> ();
        fn GetUniformBlockIndex(program: GLuint,
                                uniformBlockName: *const GLchar) -> GLuint;
        fn GetActiveUniformBlockiv(program: GLuint, uniformBlockIndex: GLuint,
                                   pname: GLenum, params: *mut GLint) -> ();
        fn UniformBlockBinding(program: GLuint, uniformBlockIndex: GLuint,
                               uniformBlockBinding: GLuint) -> ();
    }

    GL_VERSION_3_2 {
        fn DrawElementsBaseVertex(mode: GLenum, count: GLsizei, type_: GLenum,
                                  indices: *const GLvoid, basevertex: GLint) -> ();
        fn DrawRangeElementsBaseVertex(mode: GLenum, start: GLuint, end: GLuint,
                                       count: GLsizei, type_: GLenum,
                                       indices: *const GLvoid, basevertex: GLint) -> ();
        fn DrawElementsInstancedBaseVertex(mode: GLenum, count: GLsizei, type_: GLenum,
                                           indices: *const GLvoid, instancecount: GLsizei,
                                           basevertex: GLint) -> ();
        fn ProvokingVertex(mode: GLenum) -> ();
        fn FenceSync(condition: GLenum, flags: GLbitfield) -> GLsync;
        fn IsSync(sync: GLsync) -> GLboolean;
        fn DeleteSync(sync: GLsync) -> ();
        fn ClientWaitSync(sync: GLsync, flags: GLbitfield, timeout: GLuint64) -> GLenum;
        fn WaitSync(sync: GLsync, flags: GLbitfield, timeout: GLuint64) -> ();
        fn GetInteger64v(pname: GLenum, data: *mut GLint64) -> ();
        fn GetSynciv(sync: GLsync, pname: GLenum, count: GLsizei, length: *mut GLsizei,
                     values: *mut GLint) -> ();
        fn GetInteger64i_v(target: GLenum, index: GLuint, data: *mut GLint64) -> ();
        fn GetBufferParameteri64v(target: GLenum, pname: GLenum,
                                  params: *mut GLint64) -> ();
        fn FramebufferTexture(target: GLenum, attachment: GLenum, texture: GLuint,
                              level: GLint) -> ();
        fn TexImage2DMultisample(target: GLenum, samples: GLsizei, internalformat: GLenum,
                                 width: GLsizei, height: GLsizei,
                                 fixedsamplelocations: GLboolean) -> ();
        fn TexImage3DMultisample(target: GLenum, samples: GLsizei, internalformat: GLenum,
                                 width: GLsizei, height: GLsizei, depth: GLsizei,
                                 fixedsamplelocations: GLboolean) -> ();
        fn GetMultisamplefv(pname: GLenum, index: GLuint, val: *mut GLfloat) -> ();
        fn SampleMaski(maskNumber: GLuint, mask: GLbitfield) -> ();
    }

    GL_VERSION_3_3 {
        fn GenSamplers(count: GLsizei, samplers: *mut GLuint) -> ();
        fn DeleteSamplers(count: GLsizei, samplers: *const GLuint) -> ();
        fn IsSampler(sampler: GLuint) -> GLboolean;
        fn BindSampler(unit: GLuint, sampler: GLuint) -> ();
        fn SamplerParameteri(sampler: GLuint, pname: GLenum, param: GLint) -> ();
        fn SamplerParameterf(sampler: GLuint, pname: GLenum, param: GLfloat) -> ();
        fn GetSamplerParameteriv(sampler: GLuint, pname: GLenum,
                                 params: *mut GLint) -> ();
        fn GetSamplerParameterfv(sampler: GLuint, pname: GLenum,
                                 params: *mut GLfloat) -> ();
        fn QueryCounter(id: GLuint, target: GLenum) -> ();
        fn GetQueryObjecti64v(id: GLuint, pname: GLenum, params: *mut GLint64) -> ();
        fn GetQueryObjectui64v(id: GLuint, pname: GLenum, params: *mut GLuint64) -> ();
        fn VertexAttribDivisor(index: GLuint, divisor: GLuint) -> ();
    }

    GL_VERSION_4_0 {
        fn MinSampleShading(value: GLfloat) -> ();
        fn BlendEquationi(buf: GLuint, mode: GLenum) -> ();
        fn BlendEquationSeparatei(buf: GLuint, modeRGB: GLenum, modeAlpha: GLenum) -> ();
        fn BlendFunci(buf: GLuint, src: GLenum, dst: GLenum) -> ();
        fn BlendFuncSeparatei(buf: GLuint, srcRGB: GLenum, dstRGB: GLenum,
                              srcAlpha: GLenum, dstAlpha: GLenum) -> ();
        fn DrawArraysIndirect(mode: GLenum, indirect: *const GLvoid) -> ();
        fn DrawElementsIndirect(mode: GLenum, type_: GLenum,
                                indirect: *const GLvoid) -> ();
        fn PatchParameteri(pname: GLenum, value: GLint) -> ();
        fn PatchParameterfv(pname: GLenum, values: *const GLfloat) -> ();
    }

    GL_VERSION_4_1 {
        fn ReleaseShaderCompiler() -> ();
        fn ShaderBinary(count: GLsizei, shaders: *const GLuint, binaryFormat: GLenum,
                        binary: *const GLvoid, length: GLsizei) -> ();
        fn GetShaderPrecisionFormat(shadertype: GLenum, precisiontype: GLenum,
                                    range: *mut GLint, precision: *mut GLint) -> ();
        fn DepthRangef(n: GLfloat, f: GLfloat) -> ();
        fn ClearDepthf(d: GLfloat) -> ();
        fn GetProgramBinary(program: GLuint, bufSize: GLsizei, length: *mut GLsizei,
                            binaryFormat: *mut GLenum, binary: *mut GLvoid) -> ();
        fn ProgramBinary(program: GLuint, binaryFormat: GLenum, binary: *const GLvoid,
                         length: GLsizei) -> ();
        fn ProgramParameteri(program: GLuint, pname: GLenum, value: GLint) -> ();
        fn UseProgramStages(pipeline: GLuint, stages: GLbitfield, program: GLuint) -> ();
        fn ActiveShaderProgram(pipeline: GLuint, program: GLuint) -> ();
        fn CreateShaderProgramv(type_: GLenum, count: GLsizei,
                                strings: *const *const GLchar) -> GLuint;
        fn BindProgramPipeline(pipeline: GLuint) -> ();
        fn DeleteProgramPipelines(n: GLsizei, pipelines: *const GLuint) -> ();
        fn GenProgramPipelines(n: GLsizei, pipelines: *mut GLuint) -> ();
        fn IsProgramPipeline(pipeline: GLuint) -> GLboolean;
        fn ProgramUniform1i(program: GLuint, location: GLint, v0: GLint) -> ();
        fn ProgramUniform1f(program: GLuint, location: GLint, v0: GLfloat) -> ();
        fn ProgramUniform4f(program: GLuint, location: GLint, v0: GLfloat, v1: GLfloat,
                            v2: GLfloat, v3: GLfloat) -> ();
        fn ProgramUniformMatrix4fv(program: GLuint, location: GLint, count: GLsizei,
                                   transpose: GLboolean, value: *const GLfloat) -> ();
        fn ViewportArrayv(first: GLuint, count: GLsizei, v: *const GLfloat) -> ();
        fn ViewportIndexedf(index: GLuint, x: GLfloat, y: GLfloat, w: GLfloat,
                            h: GLfloat) -> ();
        fn ScissorArrayv(first: GLuint, count: GLsizei, v: *const GLint) -> ();
    }

    GL_VERSION_4_2 {
        fn DrawArraysInstancedBaseInstance(mode: GLenum, first: GLint, count: GLsizei,
                                           instancecount: GLsizei,
                                           baseinstance: GLuint) -> ();
        fn DrawElementsInstancedBaseInstance(mode: GLenum, count: GLsizei, type_: GLenum,
                                             indices: *const GLvoid,
                                             instancecount: GLsizei,
                                             baseinstance: GLuint) -> ();
        fn GetInternalformativ(target: GLenum, internalformat: GLenum, pname: GLenum,
                               count: GLsizei, params: *mut GLint) -> ();
        fn BindImageTexture(unit: GLuint, texture: GLuint, level: GLint,
                            layered: GLboolean, layer: GLint, access: GLenum,
                            format: GLenum) -> ();
        fn MemoryBarrier(barriers: GLbitfield) -> ();
        fn TexStorage1D(target: GLenum, levels: GLsizei, internalformat: GLenum,
                        width: GLsizei) -> ();
        fn TexStorage2D(target: GLenum, levels: GLsizei, internalformat: GLenum,
                        width: GLsizei, height: GLsizei) -> ();
        fn TexStorage3D(target: GLenum, levels: GLsizei, internalformat: GLenum,
                        width: GLsizei, height: GLsizei, depth: GLsizei) -> ();
    }

    GL_VERSION_4_3 {
        fn ClearBufferData(target: GLenum, internalformat: GLenum, format: GLenum,
                           type_: GLenum, data: *const GLvoid) -> ();
        fn DispatchCompute(num_groups_x: GLuint, num_groups_y: GLuint,
                           num_groups_z: GLuint) -> ();
        fn DispatchComputeIndirect(indirect: GLintptr) -> ();
        fn CopyImageSubData(srcName: GLuint, srcTarget: GLenum, srcLevel: GLint,
                            srcX: GLint, srcY: GLint, srcZ: GLint, dstName: GLuint,
                            dstTarget: GLenum, dstLevel: GLint, dstX: GLint, dstY: GLint,
                            dstZ: GLint, srcWidth: GLsizei, srcHeight: GLsizei,
                            srcDepth: GLsizei) -> ();
        fn DebugMessageControl(source: GLenum, type_: GLenum, severity: GLenum,
                               count: GLsizei, ids: *const GLuint,
                               enabled: GLboolean) -> ();
        fn DebugMessageInsert(source: GLenum, type_: GLenum, id: GLuint, severity: GLenum,
                              length: GLsizei, buf: *const GLchar) -> ();
        fn DebugMessageCallback(callback: GLDEBUGPROC, userParam: *const GLvoid) -> ();
        fn GetDebugMessageLog(count: GLuint, bufSize: GLsizei, sources: *mut GLenum,
                              types: *mut GLenum, ids: *mut GLuint,
                              severities: *mut GLenum, lengths: *mut GLsizei,
                              messageLog: *mut GLchar) -> GLuint;
        fn ObjectLabel(identifier: GLenum, name: GLuint, length: GLsizei,
                       label: *const GLchar) -> ();
        fn PushDebugGroup(source: GLenum, id: GLuint, length: GLsizei,
                          message: *const GLchar) -> ();
        fn PopDebugGroup() -> ();
        fn InvalidateFramebuffer(target: GLenum, numAttachments: GLsizei,
                                 attachments: *const GLenum) -> ();
        fn MultiDrawArraysIndirect(mode: GLenum, indirect: *const GLvoid,
                                   drawcount: GLsizei, stride: GLsizei) -> ();
        fn MultiDrawElementsIndirect(mode: GLenum, type_: GLenum, indirect: *const GLvoid,
                                     drawcount: GLsizei, stride: GLsizei) -> ();
        fn TexStorage2DMultisample(target: GLenum, samples: GLsizei,
                                   internalformat: GLenum, width: GLsizei,
                                   height: GLsizei,
                                   fixedsamplelocations: GLboolean) -> ();
        fn TextureView(texture: GLuint, target: GLenum, origtexture: GLuint,
                       internalformat: GLenum, minlevel: GLuint, numlevels: GLuint,
                       minlayer: GLuint, numlayers: GLuint) -> ();
        fn BindVertexBuffer(bindingindex: GLuint, buffer: GLuint, offset: GLintptr,
                            stride: GLsizei) -> ();
        fn VertexAttribFormat(attribindex: GLuint, size: GLint, type_: GLenum,
                              normalized: GLboolean, relativeoffset: GLuint) -> ();
        fn VertexAttribBinding(attribindex: GLuint, bindingindex: GLuint) -> ();
        fn GetProgramInterfaceiv(program: GLuint, programInterface: GLenum, pname: GLenum,
                                 params: *mut GLint) -> ();
        fn GetProgramResourceIndex(program: GLuint, programInterface: GLenum,
                                   name: *const GLchar) -> GLuint;
        fn ShaderStorageBlockBinding(program: GLuint, storageBlockIndex: GLuint,
                                     storageBlockBinding: GLuint) -> ();
    }

    GL_VERSION_4_4 {
        fn BufferStorage(target: GLenum, size: GLsizeiptr, data: *const GLvoid,
                         flags: GLbitfield) -> ();
        fn ClearTexImage(texture: GLuint, level: GLint, format: GLenum, type_: GLenum,
                         data: *const GLvoid) -> ();
        fn BindBuffersBase(target: GLenum, first: GLuint, count: GLsizei,
                           buffers: *const GLuint) -> ();
        fn BindTextures(first: GLuint, count: GLsizei, textures: *const GLuint) -> ();
        fn BindSamplers(first: GLuint, count: GLsizei, samplers: *const GLuint) -> ();
        fn BindImageTextures(first: GLuint, count: GLsizei,
                             textures: *const GLuint) -> ();
    }

    GL_VERSION_4_5 {
        fn ClipControl(origin: GLenum, depth: GLenum) -> ();
        fn CreateBuffers(n: GLsizei, buffers: *mut GLuint) -> ();
        fn NamedBufferStorage(buffer: GLuint, size: GLsizeiptr, data: *const GLvoid,
                              flags: GLbitfield) -> ();
        fn NamedBufferData(buffer: GLuint, size: GLsizeiptr, data: *const GLvoid,
                           usage: GLenum) -> ();
        fn NamedBufferSubData(buffer: GLuint, offset: GLintptr, size: GLsizeiptr,
                              data: *const GLvoid) -> ();
        fn MapNamedBuffer(buffer: GLuint, access: GLenum) -> *mut GLvoid;
        fn MapNamedBufferRange(buffer: GLuint, offset: GLintptr, length: GLsizeiptr,
                               access: GLbitfield) -> *mut GLvoid;
        fn UnmapNamedBuffer(buffer: GLuint) -> GLboolean;
        fn CreateFramebuffers(n: GLsizei, framebuffers: *mut GLuint) -> ();
        fn NamedFramebufferTexture(framebuffer: GLuint, attachment: GLenum,
                                   texture: GLuint, level: GLint) -> ();
        fn CheckNamedFramebufferStatus(framebuffer: GLuint, target: GLenum) -> GLenum;
        fn BlitNamedFramebuffer(readFramebuffer: GLuint, drawFramebuffer: GLuint,
                                srcX0: GLint, srcY0: GLint, srcX1: GLint, srcY1: GLint,
                                dstX0: GLint, dstY0: GLint, dstX1: GLint, dstY1: GLint,
                                mask: GLbitfield, filter: GLenum) -> ();
        fn CreateTextures(target: GLenum, n: GLsizei, textures: *mut GLuint) -> ();
        fn TextureStorage2D(texture: GLuint, levels: GLsizei, internalformat: GLenum,
                            width: GLsizei, height: GLsizei) -> ();
        fn TextureStorage3D(texture: GLuint, levels: GLsizei, internalformat: GLenum,
                            width: GLsizei, height: GLsizei, depth: GLsizei) -> ();
        fn TextureSubImage2D(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint,
                             width: GLsizei, height: GLsizei, format: GLenum,
                             type_: GLenum, pixels: *const GLvoid) -> ();
        fn TextureSubImage3D(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint,
                             zoffset: GLint, width: GLsizei, height: GLsizei,
                             depth: GLsizei, format: GLenum, type_: GLenum,
                             pixels: *const GLvoid) -> ();
        fn GenerateTextureMipmap(texture: GLuint) -> ();
        fn BindTextureUnit(unit: GLuint, texture: GLuint) -> ();
        fn CreateVertexArrays(n: GLsizei, arrays: *mut GLuint) -> ();
        fn VertexArrayElementBuffer(vaobj: GLuint, buffer: GLuint) -> ();
        fn VertexArrayVertexBuffer(vaobj: GLuint, bindingindex: GLuint, buffer: GLuint,
                                   offset: GLintptr, stride: GLsizei) -> ();
        fn EnableVertexArrayAttrib(vaobj: GLuint, index: GLuint) -> ();
        fn DisableVertexArrayAttrib(vaobj: GLuint, index: GLuint) -> ();
        fn VertexArrayAttribFormat(vaobj: GLuint, attribindex: GLuint, size: GLint,
                                   type_: GLenum, normalized: GLboolean,
                                   relativeoffset: GLuint) -> ();
        fn VertexArrayAttribBinding(vaobj: GLuint, attribindex: GLuint,
                                    bindingindex: GLuint) -> ();
        fn CreateSamplers(n: GLsizei, samplers: *mut GLuint) -> ();
        fn CreateProgramPipelines(n: GLsizei, pipelines: *mut GLuint) -> ();
        fn CreateQueries(target: GLenum, n: GLsizei, ids: *mut GLuint) -> ();
        fn GetGraphicsResetStatus() -> GLenum;
        fn TextureBarrier() -> ();
        fn MemoryBarrierByRegion(barriers: GLbitfield) -> ();
    }

    GL_VERSION_4_6 {
        fn SpecializeShader(shader: GLuint, pEntryPoint: *const GLchar,
                            numSpecializationConstants: GLuint,
                            pConstantIndex: *const GLuint,
                            pConstantValue: *const GLuint) -> ();
        fn MultiDrawArraysIndirectCount(mode: GLenum, indirect: *const GLvoid,
                                        drawcount: GLintptr, maxdrawcount: GLsizei,
                                        stride: GLsizei) -> ();
        fn MultiDrawElementsIndirectCount(mode: GLenum, type_: GLenum,
                                          indirect: *const GLvoid, drawcount: GLintptr,
                                          maxdrawcount: GLsizei, stride: GLsizei) -> ();
        fn PolygonOffsetClamp(factor: GLfloat, units: GLfloat, clamp: GLfloat) -> ();
    }

    GL_EXT_framebuffer_object {
        fn IsRenderbufferEXT(renderbuffer: GLuint) -> GLboolean;
        fn BindRenderbufferEXT(target: GLenum, renderbuffer: GLuint) -> ();
        fn DeleteRenderbuffersEXT(n: GLsizei, renderbuffers: *const GLuint) -> ();
        fn GenRenderbuffersEXT(n: GLsizei, renderbuffers: *mut GLuint) -> ();
        fn RenderbufferStorageEXT(target: GLenum, internalformat: GLenum, width: GLsizei,
                                  height: GLsizei) -> ();
        fn IsFramebufferEXT(framebuffer: GLuint) -> GLboolean;
        fn BindFramebufferEXT(target: GLenum, framebuffer: GLuint) -> ();
        fn DeleteFramebuffersEXT(n: GLsizei, framebuffers: *const GLuint) -> ();
        fn GenFramebuffersEXT(n: GLsizei, framebuffers: *mut GLuint) -> ();
        fn CheckFramebufferStatusEXT(target: GLenum) -> GLenum;
        fn FramebufferTexture2DEXT(target: GLenum, attachment: GLenum, textarget: GLenum,
                                   texture: GLuint, level: GLint) -> ();
        fn FramebufferRenderbufferEXT(target: GLenum, attachment: GLenum,
                                      renderbuffertarget: GLenum,
                                      renderbuffer: GLuint) -> ();
        fn GenerateMipmapEXT(target: GLenum) -> ();
    }

    GL_ARB_debug_output {
        fn DebugMessageControlARB(source: GLenum, type_: GLenum, severity: GLenum,
                                  count: GLsizei, ids: *const GLuint,
                                  enabled: GLboolean) -> ();
        fn DebugMessageInsertARB(source: GLenum, type_: GLenum, id: GLuint,
                                 severity: GLenum, length: GLsizei,
                                 buf: *const GLchar) -> ();
        fn DebugMessageCallbackARB(callback: GLDEBUGPROCARB,
                                   userParam: *const GLvoid) -> ();
        fn GetDebugMessageLogARB(count: GLuint, bufSize: GLsizei, sources: *mut GLenum,
                                 types: *mut GLenum, ids: *mut GLuint,
                                 severities: *mut GLenum, lengths: *mut GLsizei,
                                 messageLog: *mut GLchar) -> GLuint;
    }
}
