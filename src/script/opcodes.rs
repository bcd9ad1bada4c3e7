/*
    Opcode constants.

    Standard Bitcoin opcodes plus the DIVI chain extensions. Push lengths
    0x01..=0x4b are not named, they are emitted by the compiler.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Opcode {
    code: u8
}

impl Opcode {
    pub const fn into_u8(self) -> u8 {
        self.code
    }
}

impl From<u8> for Opcode {
    fn from(code: u8) -> Self {
        Self { code }
    }
}

impl From<Opcode> for u8 {
    fn from(op: Opcode) -> Self {
        op.code
    }
}

macro_rules! opcodes {
    ($($(#[$doc:meta])* $name:ident = $code:expr),* $(,)?) => {
        $(
            $(#[$doc])*
            pub const $name: Opcode = Opcode { code: $code };
        )*

        /// Canonical name of every standard opcode.
        pub(crate) static STANDARD: &[(&str, Opcode)] = &[
            $( (stringify!($name), $name) ),*
        ];
    }
}

opcodes! {
    /// Push an empty array onto the stack
    OP_0 = 0x00,
    /// Read the next byte as N; push the next N bytes as an array onto the stack
    OP_PUSHDATA1 = 0x4c,
    /// Read the next 2 bytes as N; push the next N bytes as an array onto the stack
    OP_PUSHDATA2 = 0x4d,
    /// Read the next 4 bytes as N; push the next N bytes as an array onto the stack
    OP_PUSHDATA4 = 0x4e,
    /// Push the array 0x81 onto the stack
    OP_1NEGATE = 0x4f,
    /// Synonym for OP_RETURN
    OP_RESERVED = 0x50,
    /// Push the number 1 onto the stack
    OP_1 = 0x51,
    OP_2 = 0x52,
    OP_3 = 0x53,
    OP_4 = 0x54,
    OP_5 = 0x55,
    OP_6 = 0x56,
    OP_7 = 0x57,
    OP_8 = 0x58,
    OP_9 = 0x59,
    OP_10 = 0x5a,
    OP_11 = 0x5b,
    OP_12 = 0x5c,
    OP_13 = 0x5d,
    OP_14 = 0x5e,
    OP_15 = 0x5f,
    /// Push the number 16 onto the stack
    OP_16 = 0x60,
    /// Does nothing
    OP_NOP = 0x61,
    /// Synonym for OP_RETURN
    OP_VER = 0x62,
    /// Pop and execute the next statements if a nonzero element was popped
    OP_IF = 0x63,
    /// Pop and execute the next statements if a zero element was popped
    OP_NOTIF = 0x64,
    /// Fail the script unconditionally, does not even need to be executed
    OP_VERIF = 0x65,
    /// Fail the script unconditionally, does not even need to be executed
    OP_VERNOTIF = 0x66,
    /// Execute statements if those after the previous OP_IF were not, and vice-versa
    OP_ELSE = 0x67,
    /// Pop and execute the next statements if a zero element was popped
    OP_ENDIF = 0x68,
    /// If the top value is zero or the stack is empty, fail; otherwise, pop the stack
    OP_VERIFY = 0x69,
    /// Fail the script immediately
    OP_RETURN = 0x6a,
    OP_TOALTSTACK = 0x6b,
    OP_FROMALTSTACK = 0x6c,
    OP_2DROP = 0x6d,
    OP_2DUP = 0x6e,
    OP_3DUP = 0x6f,
    OP_2OVER = 0x70,
    OP_2ROT = 0x71,
    OP_2SWAP = 0x72,
    OP_IFDUP = 0x73,
    OP_DEPTH = 0x74,
    OP_DROP = 0x75,
    /// Duplicate the top stack element
    OP_DUP = 0x76,
    OP_NIP = 0x77,
    /// Copy the second-to-top stack item to the top
    OP_OVER = 0x78,
    OP_PICK = 0x79,
    OP_ROLL = 0x7a,
    OP_ROT = 0x7b,
    OP_SWAP = 0x7c,
    OP_TUCK = 0x7d,
    OP_CAT = 0x7e,
    OP_SUBSTR = 0x7f,
    OP_LEFT = 0x80,
    OP_RIGHT = 0x81,
    OP_SIZE = 0x82,
    OP_INVERT = 0x83,
    OP_AND = 0x84,
    OP_OR = 0x85,
    OP_XOR = 0x86,
    /// Push 1 if the top two items are equal, 0 otherwise
    OP_EQUAL = 0x87,
    /// OP_EQUAL followed by OP_VERIFY
    OP_EQUALVERIFY = 0x88,
    OP_RESERVED1 = 0x89,
    OP_RESERVED2 = 0x8a,
    OP_1ADD = 0x8b,
    OP_1SUB = 0x8c,
    OP_2MUL = 0x8d,
    OP_2DIV = 0x8e,
    OP_NEGATE = 0x8f,
    OP_ABS = 0x90,
    OP_NOT = 0x91,
    OP_0NOTEQUAL = 0x92,
    OP_ADD = 0x93,
    OP_SUB = 0x94,
    OP_MUL = 0x95,
    OP_DIV = 0x96,
    OP_MOD = 0x97,
    OP_LSHIFT = 0x98,
    OP_RSHIFT = 0x99,
    OP_BOOLAND = 0x9a,
    OP_BOOLOR = 0x9b,
    OP_NUMEQUAL = 0x9c,
    OP_NUMEQUALVERIFY = 0x9d,
    OP_NUMNOTEQUAL = 0x9e,
    OP_LESSTHAN = 0x9f,
    OP_GREATERTHAN = 0xa0,
    OP_LESSTHANOREQUAL = 0xa1,
    OP_GREATERTHANOREQUAL = 0xa2,
    OP_MIN = 0xa3,
    OP_MAX = 0xa4,
    OP_WITHIN = 0xa5,
    OP_RIPEMD160 = 0xa6,
    OP_SHA1 = 0xa7,
    OP_SHA256 = 0xa8,
    /// Pop the top stack item and push its RIPEMD(SHA256) hash
    OP_HASH160 = 0xa9,
    /// Pop the top stack item and push its SHA256(SHA256) hash
    OP_HASH256 = 0xaa,
    OP_CODESEPARATOR = 0xab,
    /// <https://en.bitcoin.it/wiki/OP_CHECKSIG> pushing 1/0 for success/failure
    OP_CHECKSIG = 0xac,
    OP_CHECKSIGVERIFY = 0xad,
    OP_CHECKMULTISIG = 0xae,
    OP_CHECKMULTISIGVERIFY = 0xaf,
    /// Does nothing
    OP_NOP1 = 0xb0,
    /// <https://github.com/bitcoin/bips/blob/master/bip-0065.mediawiki>
    OP_CHECKLOCKTIMEVERIFY = 0xb1,
    /// <https://github.com/bitcoin/bips/blob/master/bip-0112.mediawiki>
    OP_CHECKSEQUENCEVERIFY = 0xb2,
    OP_NOP4 = 0xb3,
    OP_NOP5 = 0xb4,
    OP_NOP6 = 0xb5,
    OP_NOP7 = 0xb6,
    OP_NOP8 = 0xb7,
    OP_NOP9 = 0xb8,
    OP_NOP10 = 0xb9,
    /// Template matching marker, never valid in a script
    OP_PUBKEYHASH = 0xfd,
    /// Template matching marker, never valid in a script
    OP_PUBKEY = 0xfe,
    OP_INVALIDOPCODE = 0xff,
}

pub const OP_FALSE: Opcode = OP_0;
pub const OP_TRUE: Opcode = OP_1;
pub const OP_NOP2: Opcode = OP_CHECKLOCKTIMEVERIFY;
pub const OP_NOP3: Opcode = OP_CHECKSEQUENCEVERIFY;

/// Extra names resolving to standard opcodes.
pub(crate) static STANDARD_ALIASES: &[(&str, Opcode)] = &[
    ("OP_FALSE", OP_FALSE),
    ("OP_TRUE", OP_TRUE),
    ("OP_NOP2", OP_NOP2),
    ("OP_NOP3", OP_NOP3),
];

//DIVI extensions

/// Vault staking: the spending transaction must be a coinstake. Alias of OP_NOP10.
pub const OP_REQUIRE_COINSTAKE: Opcode = OP_NOP10;
/// Cold staking verification, last output free
pub const OP_CHECKCOLDSTAKEVERIFY_LOF: Opcode = Opcode { code: 0xd1 };
/// Cold staking verification
pub const OP_CHECKCOLDSTAKEVERIFY: Opcode = Opcode { code: 0xd2 };
/// Marks exchange addresses
pub const OP_EXCHANGEADDR: Opcode = Opcode { code: 0xe0 };
