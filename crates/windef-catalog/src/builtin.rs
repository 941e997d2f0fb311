use windef_core::{Entry, ParamMacro, RetTypeMacro};

macro_rules! define_types {
    (
        plain {
            $($plain:ident => $ty:literal,)*
        }
        word_size {
            $($word:ident => ($w64:literal, $w32:literal),)*
        }
        half_ptr {
            $($half:ident => ($h64:literal, $h32:literal),)*
        }
        unicode {
            $($text:ident => ($wide:literal, $narrow:literal),)*
        }
    ) => {
        /// Every alias in the builtin catalog, named as in the Windows headers.
        #[allow(non_camel_case_types, clippy::upper_case_acronyms)]
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        pub enum WinType {
            $($plain,)*
            $($word,)*
            $($half,)*
            $($text,)*
        }

        impl WinType {
            /// All aliases in declaration order.
            pub const ALL: &'static [WinType] = &[
                $(Self::$plain,)*
                $(Self::$word,)*
                $(Self::$half,)*
                $(Self::$text,)*
            ];

            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$plain => stringify!($plain),)*
                    $(Self::$word => stringify!($word),)*
                    $(Self::$half => stringify!($half),)*
                    $(Self::$text => stringify!($text),)*
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $(stringify!($plain) => Some(Self::$plain),)*
                    $(stringify!($word) => Some(Self::$word),)*
                    $(stringify!($half) => Some(Self::$half),)*
                    $(stringify!($text) => Some(Self::$text),)*
                    _ => None,
                }
            }

            /// Catalog value for this alias.
            pub fn entry(self) -> Entry {
                match self {
                    $(Self::$plain => Entry::plain($ty),)*
                    $(Self::$word => Entry::WordSize(ParamMacro::new($w64, $w32)),)*
                    $(Self::$half => Entry::WordSize(ParamMacro::half($h64, $h32)),)*
                    $(Self::$text => Entry::Unicode(RetTypeMacro::new($wide, $narrow)),)*
                }
            }
        }
    };
}

define_types! {
    plain {
        VOID => "void",
        BOOL => "int32",
        BOOLEAN => "uint8",
        BYTE => "uint8",
        CCHAR => "int8",
        CHAR => "int8",
        UCHAR => "uint8",
        WCHAR => "wchar16",
        SHORT => "int16",
        USHORT => "uint16",
        WORD => "uint16",
        ATOM => "uint16",
        LANGID => "uint16",
        INT => "int32",
        UINT => "uint32",
        LONG => "int32",
        ULONG => "uint32",
        DWORD => "uint32",
        COLORREF => "uint32",
        LCID => "uint32",
        LCTYPE => "uint32",
        LGRPID => "uint32",
        HRESULT => "int32",
        NTSTATUS => "int32",
        INT8 => "int8",
        INT16 => "int16",
        INT32 => "int32",
        INT64 => "int64",
        UINT8 => "uint8",
        UINT16 => "uint16",
        UINT32 => "uint32",
        UINT64 => "uint64",
        LONG32 => "int32",
        LONG64 => "int64",
        ULONG32 => "uint32",
        ULONG64 => "uint64",
        DWORD32 => "uint32",
        DWORD64 => "uint64",
        DWORDLONG => "uint64",
        LONGLONG => "int64",
        ULONGLONG => "uint64",
        QWORD => "uint64",
        USN => "int64",
        FLOAT => "float",
        PFLOAT => "float*",
        PBOOL => "int32*",
        LPBOOL => "int32*",
        PBOOLEAN => "uint8*",
        PBYTE => "uint8*",
        LPBYTE => "uint8*",
        PCHAR => "int8*",
        PUCHAR => "uint8*",
        PWCHAR => "wchar16*",
        PSHORT => "int16*",
        PUSHORT => "uint16*",
        PWORD => "uint16*",
        LPWORD => "uint16*",
        PINT => "int32*",
        LPINT => "int32*",
        PUINT => "uint32*",
        PLONG => "int32*",
        LPLONG => "int32*",
        PULONG => "uint32*",
        PDWORD => "uint32*",
        LPDWORD => "uint32*",
        LPCOLORREF => "uint32*",
        PLCID => "uint32*",
        PLONGLONG => "int64*",
        PULONGLONG => "uint64*",
        PDWORD64 => "uint64*",
        PDWORDLONG => "uint64*",
        PSTR => "char*",
        PCSTR => "char*",
        LPSTR => "char*",
        LPCSTR => "char*",
        PWSTR => "wchar16*",
        PCWSTR => "wchar16*",
        LPWSTR => "wchar16*",
        LPCWSTR => "wchar16*",
    }
    word_size {
        PVOID => ("uint64*", "uint32*"),
        LPVOID => ("uint64*", "uint32*"),
        LPCVOID => ("uint64*", "uint32*"),
        POINTER_32 => ("uint64*", "uint32*"),
        POINTER_64 => ("uint64*", "uint32*"),
        POINTER_SIGNED => ("int64*", "int32*"),
        POINTER_UNSIGNED => ("uint64*", "uint32*"),
        HANDLE => ("int64", "int32"),
        HACCEL => ("int64", "int32"),
        HBITMAP => ("int64", "int32"),
        HBRUSH => ("int64", "int32"),
        HCOLORSPACE => ("int64", "int32"),
        HCONV => ("int64", "int32"),
        HCONVLIST => ("int64", "int32"),
        HCURSOR => ("int64", "int32"),
        HDC => ("int64", "int32"),
        HDDEDATA => ("int64", "int32"),
        HDESK => ("int64", "int32"),
        HDROP => ("int64", "int32"),
        HDWP => ("int64", "int32"),
        HENHMETAFILE => ("int64", "int32"),
        HFILE => ("int64", "int32"),
        HFONT => ("int64", "int32"),
        HGDIOBJ => ("int64", "int32"),
        HGLOBAL => ("int64", "int32"),
        HHOOK => ("int64", "int32"),
        HICON => ("int64", "int32"),
        HINSTANCE => ("int64", "int32"),
        HKEY => ("int64", "int32"),
        HKL => ("int64", "int32"),
        HLOCAL => ("int64", "int32"),
        HMENU => ("int64", "int32"),
        HMETAFILE => ("int64", "int32"),
        HMODULE => ("int64", "int32"),
        HMONITOR => ("int64", "int32"),
        HPALETTE => ("int64", "int32"),
        HPEN => ("int64", "int32"),
        HRGN => ("int64", "int32"),
        HRSRC => ("int64", "int32"),
        HSZ => ("int64", "int32"),
        HWINEVENTHOOK => ("int64", "int32"),
        HWINSTA => ("int64", "int32"),
        HWND => ("int64", "int32"),
        SC_HANDLE => ("int64", "int32"),
        SC_LOCK => ("int64", "int32"),
        SERVICE_STATUS_HANDLE => ("int64", "int32"),
        LPHANDLE => ("int64*", "int32*"),
        PHANDLE => ("int64*", "int32*"),
        PHKEY => ("int64*", "int32*"),
        INT_PTR => ("int64", "int32"),
        LONG_PTR => ("int64", "int32"),
        SSIZE_T => ("int64", "int32"),
        LPARAM => ("int64", "int32"),
        LRESULT => ("int64", "int32"),
        UINT_PTR => ("uint64", "uint32"),
        ULONG_PTR => ("uint64", "uint32"),
        DWORD_PTR => ("uint64", "uint32"),
        SIZE_T => ("uint64", "uint32"),
        WPARAM => ("uint64", "uint32"),
        PINT_PTR => ("int64*", "int32*"),
        PLONG_PTR => ("int64*", "int32*"),
        PSSIZE_T => ("int64*", "int32*"),
        PUINT_PTR => ("uint64*", "uint32*"),
        PULONG_PTR => ("uint64*", "uint32*"),
        PDWORD_PTR => ("uint64*", "uint32*"),
        PSIZE_T => ("uint64*", "uint32*"),
    }
    half_ptr {
        HALF_PTR => ("int32", "int16"),
        UHALF_PTR => ("uint32", "uint16"),
        PHALF_PTR => ("int32*", "int16*"),
        PUHALF_PTR => ("uint32*", "uint16*"),
    }
    unicode {
        TCHAR => ("wchar16", "uint8"),
        TBYTE => ("wchar16", "uint8"),
        PTCHAR => ("wchar16*", "uint8*"),
        PTBYTE => ("wchar16*", "uint8*"),
        PTSTR => ("wchar16*", "char*"),
        PCTSTR => ("wchar16*", "char*"),
        LPTSTR => ("wchar16*", "char*"),
        LPCTSTR => ("wchar16*", "char*"),
    }
}

impl std::fmt::Display for WinType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
