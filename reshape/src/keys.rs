//! Per-seed key material for the shapes stream cipher.
//!
//! One 16-word key per possible header seed byte, extracted from the
//! engine binary as-is. The table has no internal structure worth
//! modelling; words 8 and 9 of each entry are overwritten with the block
//! counter before use and their stored values are never observed.

/// 256 seeds x 16 little-endian dwords (16 KiB).
pub(crate) const SEED_KEYS: [[u32; 16]; 256] = [
    // seed 0x00
    [
        0x343ADAFB, 0x7FC9C549, 0x956D0369, 0x10919D78, 0x9AE513B5, 0x720A521F, 0x0214CC62, 0x793DAE35,
        0x95EAA565, 0x56138E67, 0x1C0EDE74, 0x36010F6D, 0x701BAFC8, 0x0FB9C5F2, 0x543C7FA9, 0x65DFD16F,
    ],
    // seed 0x01
    [
        0xEB95D201, 0xE01C7C95, 0xA4715405, 0x4236BF84, 0x8046A454, 0xC97FC9AD, 0x43155ED0, 0x59DA67E1,
        0xB8C71816, 0x14F5D742, 0x64F39F48, 0xDA08DFB5, 0x8C183A94, 0xE463904A, 0x922575AC, 0x1FDE6FB3,
    ],
    // seed 0x02
    [
        0x501C2752, 0xE136EF7F, 0x12D0C6F0, 0x8F8F32B1, 0xE33E84D2, 0x749AD409, 0x4725DFC6, 0x52A8E6CE,
        0x65F3A2CA, 0xCC4DC108, 0x09826073, 0x820EE6B1, 0x5DBB8C90, 0x657748CB, 0xE0E74621, 0x0EBC8ED4,
    ],
    // seed 0x03
    [
        0x056E934D, 0xC45022A6, 0xC1B4A6D4, 0xA31EBD40, 0x7DE7A9BB, 0xDC51A8E2, 0xBB7130C8, 0xE481FC20,
        0x6BC0EAAE, 0x51721D59, 0x1E921D1C, 0xEFE9339E, 0x10472182, 0xA5EC78B9, 0x7ED2EA76, 0x0C878102,
    ],
    // seed 0x04
    [
        0x5224ED01, 0xF2EFC243, 0xC656538E, 0xAC0BA1D0, 0x2F7573D4, 0x0003EB7E, 0x0DA65EB9, 0x81F78715,
        0x99A20A10, 0xB9B11161, 0x9692C842, 0x96331311, 0x077E132D, 0xE98F1203, 0x47F0BF2E, 0x82EC83A7,
    ],
    // seed 0x05
    [
        0xC1019178, 0x8626D52D, 0x45B88621, 0xBABE4CC5, 0x2AD3CF3A, 0x24B44156, 0x3E232D63, 0x48DC5C2A,
        0xF84C1EE6, 0x459F9B6A, 0x290DE008, 0x20739A9D, 0x3A40598E, 0x57D08232, 0xA3F56EA1, 0x9DC22B46,
    ],
    // seed 0x06
    [
        0x97CAA0F2, 0x7BE1A5C0, 0xD60E95A2, 0xAAECB700, 0xE8D771E3, 0x2DDB9589, 0x5DF9459D, 0x8FE628DB,
        0x6A7F5AEB, 0x5E2B0B5F, 0xD08BDA07, 0xFA226A42, 0xC02DB44D, 0x4193719D, 0xFB311CA5, 0x3A8345C7,
    ],
    // seed 0x07
    [
        0x54BEBA25, 0x6381D78E, 0xD45B5A56, 0xE2E33183, 0x597F7EC4, 0x0D2C6DED, 0x8DB964E9, 0xFD1BEE16,
        0xB652F8E8, 0x1AF26300, 0xC2D1DE0C, 0x0BCBE8AB, 0xF14F1F93, 0xEDCFA38F, 0xF46F84B7, 0xFF9A652F,
    ],
    // seed 0x08
    [
        0xA73BF62D, 0xA81ABEA0, 0x7D7B0F78, 0x50FD8E92, 0xFC01CF57, 0xFDAD1F4D, 0x8AE4E7D1, 0xDBB70E4D,
        0x6C67DD72, 0xA364815D, 0x766AF857, 0x8F25E655, 0x103343D3, 0x15F2604E, 0x0D48E0B5, 0xDEE23B90,
    ],
    // seed 0x09
    [
        0xEFA9D709, 0xE60F1A54, 0x505794DA, 0x19956E2A, 0x4ABB03E5, 0xC3B3681A, 0xF2FA8D05, 0xD5FD8707,
        0x72E7706F, 0x7A25A50E, 0x3E13BDF7, 0xE5D82B2E, 0xDC1ABB57, 0x57434BCD, 0x34E4A0DC, 0x1A282877,
    ],
    // seed 0x0A
    [
        0xB094427E, 0x18DFA2DD, 0x415BE926, 0xF6735ADA, 0x92005675, 0x38AE7E78, 0x037E1EB2, 0xF7674E94,
        0x9D04FCFA, 0x5C2ED27F, 0x03B6811A, 0x7A31C443, 0xA2783CC7, 0xF3833F89, 0x49BBF4EE, 0xA6E531C3,
    ],
    // seed 0x0B
    [
        0xAFCDA008, 0x0E458866, 0x51144EAA, 0x6BD72136, 0x684666AF, 0x654E744A, 0xF72E374F, 0x3CE43BE7,
        0x722557F2, 0x484C99E0, 0x6A160672, 0x60B475DE, 0xD5FD8940, 0x3222A7B1, 0xBD550189, 0xCEF855E3,
    ],
    // seed 0x0C
    [
        0x8AED03FA, 0x0BDA3208, 0x5AB36EA9, 0x34290297, 0xD3F7DB33, 0x5F560BB9, 0x9D5C2F31, 0x06B999E7,
        0x1AEE3629, 0xFC73012D, 0x69029176, 0xB075DECC, 0x2D76165D, 0x3C9106AB, 0x17D66AFA, 0x50FEC226,
    ],
    // seed 0x0D
    [
        0xBD7BF95E, 0x37D9AC94, 0xEBDFC2B4, 0x42597B32, 0x22946FD7, 0x340C42EC, 0x94B99ACF, 0x13F946FA,
        0x5CC30A75, 0x32986700, 0xD5F71372, 0xBEA58293, 0x7C09DF2C, 0xCD428960, 0x4DF7491D, 0x4A7E9DEB,
    ],
    // seed 0x0E
    [
        0x96627950, 0x2CF5EE19, 0x93333193, 0xBD9CA0CD, 0xCD2CA0C1, 0x22DFF7BD, 0x7569CDB4, 0x3664E665,
        0x3DDEDF0B, 0xC7E6677C, 0x7E91E56B, 0xB5E47002, 0xCC69465E, 0x7EA92BAD, 0x3E0538A7, 0xD661FF77,
    ],
    // seed 0x0F
    [
        0xDAEECBF4, 0x7235E21B, 0x8E9ED5EF, 0x01879781, 0x733D04A4, 0x071DA79E, 0x3C9B0AC3, 0x22BC50BC,
        0x645D4AB2, 0xF28DA617, 0xA961E7E8, 0xC559CFC5, 0x97F31FC4, 0xDEBDB3BE, 0x898085F4, 0x5EE54219,
    ],
    // seed 0x10
    [
        0xA5D3016F, 0x598AF31C, 0x4417F48F, 0xE0059B98, 0xA09FCF70, 0xABC5DB02, 0xE117EC64, 0x82539128,
        0xD830532F, 0x3172E40F, 0xA66B7505, 0xC1D017EA, 0xDC221A4A, 0x2A4E3830, 0x4E8D5C2C, 0x1923E36D,
    ],
    // seed 0x11
    [
        0x23C4C200, 0x0741B096, 0x486A30D3, 0xCDA3D11B, 0x176D64D8, 0xD29BEC5B, 0xF23F0030, 0x8684CD8B,
        0x130E19DE, 0xA08DBC2A, 0x293B037D, 0xDFD09323, 0x1558D702, 0xAEF621C8, 0x1762FD48, 0xE5A976B5,
    ],
    // seed 0x12
    [
        0x6708E965, 0x01235B3F, 0xB37381C1, 0x0484C493, 0x93520D2A, 0xBEC7A6C0, 0x5C776A42, 0x0103925F,
        0x45A98945, 0xEBCE173F, 0xCCC2B0C2, 0xD918DE95, 0x7E0D3798, 0xA1A9E7A9, 0x821E31C1, 0x27D7A53E,
    ],
    // seed 0x13
    [
        0x1B74504A, 0x0A7A5179, 0xA0394972, 0xEC426030, 0xCA8B7C30, 0xCC1A7158, 0x1B859056, 0xD425B860,
        0xFA7DE9DE, 0xCB7D52B2, 0xC29E7875, 0x6DD2CCEA, 0x1536C96E, 0x3488CB59, 0x44BEB6FE, 0x82C446C5,
    ],
    // seed 0x14
    [
        0xE2775B45, 0xC7BB910D, 0x8190D08F, 0x5091BF57, 0x2C15FC16, 0x2AB03867, 0x829D4B77, 0xDAE3070C,
        0xE0F64DB9, 0x4BCBD36F, 0x28E6E5C4, 0xFE9CFE65, 0x52FF50B0, 0x55FF6FE8, 0x7BBB0245, 0x5AFDE798,
    ],
    // seed 0x15
    [
        0x2A0292C4, 0x37409048, 0x250231E9, 0x016432A2, 0x7D96D2C8, 0x2EF2D1CB, 0x58B96306, 0x20C31ACE,
        0xDE4F1681, 0xBAF2E28D, 0x515C64C5, 0xFD8FCCD3, 0x0B6F192C, 0xFB1E660F, 0xA1B62708, 0x827CECCB,
    ],
    // seed 0x16
    [
        0xBC3F6C2C, 0x1BEAED5B, 0xC7624894, 0x266C4683, 0x538EE5E9, 0x744B4FA3, 0xC15F52AB, 0xF261D6AC,
        0x7EC9495D, 0xAD4535D5, 0x85060546, 0xBF65DCC8, 0x1ACE39AC, 0xD435B283, 0x65459C96, 0x2D5EB771,
    ],
    // seed 0x17
    [
        0x49751DB7, 0x8DD39325, 0x9BC770E2, 0x7D35792E, 0xB91BBA50, 0x55DF8C32, 0x07375E4A, 0x8E480491,
        0x59D53005, 0x08AA9F85, 0x1E2B05BB, 0x3872CC23, 0x85904A01, 0x6B9F03EE, 0xE0F5A51B, 0x687534AF,
    ],
    // seed 0x18
    [
        0xBC4375EE, 0xDFA80C6D, 0x2B72FD06, 0xF46682B6, 0x190C437B, 0xC5226498, 0x00CC50A2, 0xD4E83494,
        0xBB5700AA, 0xE5438555, 0xA30F62AE, 0x1B2B3D01, 0xE8CDD18E, 0xA32C3D00, 0x17D3EFE2, 0xE3407437,
    ],
    // seed 0x19
    [
        0x31D8783E, 0x691D01EB, 0xF9FEDC2C, 0x4BB1CAAA, 0xDA54F161, 0xA3F095F9, 0x1E86F90D, 0x16254101,
        0xA844E75E, 0xFDDA6654, 0x9F942442, 0xDDCE8151, 0xC97231D0, 0x9715D026, 0x76B6E3C2, 0x9F318494,
    ],
    // seed 0x1A
    [
        0x65B06F24, 0xF5579C72, 0x021866B4, 0xC566720C, 0x1DC58877, 0x5B4C30D9, 0x1D29A1F8, 0xEFA7DC4A,
        0x35D93FC2, 0x6DAB6B53, 0x59FAC0C1, 0x95052937, 0x96327609, 0x831632E8, 0x822127FF, 0x623A8DDD,
    ],
    // seed 0x1B
    [
        0xF7B64AB6, 0xFBF5F76C, 0xF2CF7C7C, 0x011829D3, 0x5B371FBB, 0x5AE57783, 0xEB61D8C9, 0x6165AB8D,
        0x3B09EB2B, 0x322ACC09, 0x4CAE2F8C, 0x2182A71E, 0xEF00BF4D, 0x56C578A9, 0xA673780B, 0x8EF94328,
    ],
    // seed 0x1C
    [
        0x7DE719DD, 0x84E5F222, 0xB484246B, 0x24826946, 0x3412C491, 0x7E7D7F63, 0x656FD74E, 0x1ECA6CCA,
        0x10600988, 0x13DDAFEB, 0x3CA60779, 0x19A2C047, 0x687EAD8F, 0x772C31D8, 0x77E5E141, 0xA86DB3C5,
    ],
    // seed 0x1D
    [
        0x321FC2C4, 0x5C627A8D, 0x49B9EA42, 0xDC9F51D1, 0x6E19D5B3, 0xF6287BC5, 0xD58535D2, 0xF6BBF475,
        0x7ADC21C1, 0xFE0C5BA1, 0x5B8DA3DB, 0xA838F281, 0xCD726C43, 0x5462D320, 0x3625A0DA, 0xCCCE7C4A,
    ],
    // seed 0x1E
    [
        0x06770FBA, 0x9302A7F4, 0xFBCBB338, 0x65025F4C, 0xAE9340DF, 0xE6E8274B, 0x0DD30BFC, 0x343081F6,
        0x13741222, 0x91FC4C1E, 0x6F4D126D, 0x3548FF88, 0xEAA04B48, 0xA04AFAE1, 0x338CFB84, 0x5BAA8276,
    ],
    // seed 0x1F
    [
        0x42BF8584, 0x32998C8D, 0x42B2333B, 0x6872F74A, 0x9A952199, 0x1EAAFCD0, 0x8489C06F, 0xC28ABDE6,
        0xCC12B5C6, 0x8BC19992, 0xD4C12EE2, 0x1300B5B9, 0x3C172A8F, 0x5D4A9925, 0x0AD005ED, 0x15190882,
    ],
    // seed 0x20
    [
        0x37E77926, 0xB3376763, 0x0C377FF4, 0x5C2290BA, 0x35DC8921, 0xB8495DFD, 0x8E1C6B64, 0xCF47BB93,
        0x2AB5E4CE, 0xFA3A9B5A, 0x162AD9A5, 0xC9562F9A, 0x1FC7D234, 0xD5EB65DE, 0x3A202A3C, 0x9191A98A,
    ],
    // seed 0x21
    [
        0x20307EBB, 0x870A2EF3, 0xA7C7758F, 0xB1C57180, 0x17CCA989, 0xF199CCF8, 0x860B2FBC, 0x5B513199,
        0x42986B9F, 0xFA183888, 0x37B1B966, 0xDF98FB95, 0x78DF6D84, 0xE931C0D9, 0xE710B476, 0xC89B1E00,
    ],
    // seed 0x22
    [
        0xA2EED263, 0xA8AB3949, 0xC549DE9B, 0x9BC487EA, 0xA7AC9C64, 0xAC47A8BC, 0x0AACF29F, 0xEEE51414,
        0xF9FFB039, 0xC55FFCFC, 0xDB5687C1, 0xE4A327E8, 0xA44099F3, 0x5404E962, 0x2A2A8217, 0x99B14E0C,
    ],
    // seed 0x23
    [
        0x2A2BF7C9, 0x3357520B, 0x5C674DDC, 0x4A65918F, 0xC8DDFDD6, 0xB89500C7, 0x7CC16823, 0xBC514D10,
        0xFE8B19AC, 0xFC09F688, 0xFDF5ECC6, 0x8C4CFEE2, 0x9EC42FE3, 0xF474DB73, 0x6E981BF4, 0xB15DA037,
    ],
    // seed 0x24
    [
        0x29ADD594, 0x12AD318A, 0x9D676AFA, 0x34758A1E, 0x4EE0B20B, 0x8D62E587, 0x3831E829, 0x983DDBFA,
        0x9B85E5CB, 0x7A56D456, 0xAAC43BEC, 0xECB74627, 0xF09F808F, 0x936F05AF, 0x478FBCB7, 0x8DDE8ADB,
    ],
    // seed 0x25
    [
        0xAB59752E, 0x66E3603E, 0xAC4C0FB5, 0x021127DE, 0x3BB50E9C, 0x6928F936, 0x56F59EBA, 0x57FF9B17,
        0xA1587C45, 0x5A17CD37, 0xE3F23C1E, 0xF74B61DD, 0x6F2E0EA6, 0xA2DDED10, 0xFD60A10A, 0xE884C789,
    ],
    // seed 0x26
    [
        0x6E20C298, 0x23AC12BC, 0xB7C09E30, 0xD4F1777A, 0xAEC9E6B9, 0xEF1AD7D9, 0xF3D5FB29, 0x495801C6,
        0xADD28787, 0x268612F7, 0x2EE5FBA5, 0x78FBAA3C, 0x7A887E3B, 0x157C8118, 0x90177245, 0x1FE06805,
    ],
    // seed 0x27
    [
        0x56C554B8, 0x526BC49A, 0xACF3D948, 0x0F628C45, 0x0A9D741B, 0x6890B9A8, 0x283E3A05, 0x7410B6FE,
        0xCBAE9A44, 0xF4498F7E, 0x856AC1EB, 0xD55665B0, 0xCC30E2FE, 0xBFE6E977, 0xFC79F19C, 0x25F1270C,
    ],
    // seed 0x28
    [
        0x31EE9260, 0x4770E1CA, 0xD276419A, 0x71ACAE05, 0x4B648F26, 0xB928BD4B, 0xA5A70A09, 0x4F71B237,
        0x04D55EEB, 0x1C2AA3A6, 0x8E81959E, 0xF0B0F4C5, 0xDF1CDFF6, 0xD855F983, 0xCFF14D73, 0xE5E3C8C4,
    ],
    // seed 0x29
    [
        0x2C0E032D, 0x39CF0EC6, 0x7D0638DB, 0x474807DA, 0xB5E620D3, 0x44657082, 0xC9C1618B, 0xE43B9917,
        0x57A07EC1, 0xFE34F7D4, 0x56EE246D, 0x40C4430D, 0x1CB98163, 0x6973AAD3, 0x34A242C0, 0xEC2A2E0F,
    ],
    // seed 0x2A
    [
        0xC4E6B6C1, 0x16B87B85, 0x4074BC7C, 0xFF011827, 0xDB23E6CB, 0x3D391DE3, 0xCF09A9E9, 0x56B0D6B5,
        0x645125E5, 0xFD2D7E0A, 0xA321644C, 0xB756F64E, 0xFF9CA230, 0x236BEC55, 0x24585D39, 0x13A12616,
    ],
    // seed 0x2B
    [
        0x24879330, 0x3BD09AAB, 0xFB26C3C0, 0x461B87F5, 0xACC2BE39, 0xF82FD148, 0x9BF1BF41, 0x98F18815,
        0x096ACF08, 0xA4205610, 0xDD325CA9, 0xA062ABCB, 0x4A70C4A3, 0xA62F54F7, 0x3FE360DB, 0x0ED7B85B,
    ],
    // seed 0x2C
    [
        0xFB2E31A1, 0x3676A78B, 0xAEA82126, 0xD41176BB, 0xFF6D6887, 0x5F61053B, 0x1B4B1F7B, 0x0AE9F732,
        0xDDBCBB95, 0x450EE1D8, 0xAF7D3542, 0x3915118D, 0xEBFAC543, 0x1C0BB84D, 0x89629011, 0xEDE77719,
    ],
    // seed 0x2D
    [
        0x4B827120, 0xC324BCFD, 0x5D013B24, 0x49A6095F, 0x6D2028BC, 0x6F51D233, 0x19E169F9, 0x6F475301,
        0x21379EA3, 0x7A423D89, 0xDC7E1E24, 0x0E19CFB0, 0x4F352F62, 0x5A52D059, 0x0202F4A2, 0x1AF0C896,
    ],
    // seed 0x2E
    [
        0x68D9166C, 0xCE38F14E, 0xD105D2A9, 0x66A3E604, 0x64260597, 0xCC764FCA, 0xBB2B9E8C, 0x65A633BE,
        0x29CF7ACC, 0xE42AD8A7, 0x6E8FE360, 0x58757FDF, 0x8E42EB6D, 0xD12AAEAF, 0x7F365D71, 0x2B642105,
    ],
    // seed 0x2F
    [
        0xEC797306, 0xCEC2905E, 0xD0A401E8, 0x664EA62C, 0xF6E55A48, 0x8617D352, 0x3A199480, 0x94C9BA62,
        0x984D571D, 0x20FB4840, 0x2EE44B37, 0x8395552A, 0xA164B477, 0xBCBAAF8D, 0x5715F9A3, 0xD97491FC,
    ],
    // seed 0x30
    [
        0xDA0A8B6D, 0x5963DFE6, 0x911B7A72, 0x6DB40674, 0x8D3F45CB, 0x4FAD0F8D, 0x79194627, 0x35FBAFFB,
        0xA20D904A, 0x6444B831, 0x94D96AEB, 0x1BC100A0, 0x77E63AD6, 0xEC1AD883, 0xC877B47D, 0x9926CE6F,
    ],
    // seed 0x31
    [
        0xFD701999, 0x7027D8B7, 0xC3FB1831, 0xAB057403, 0xB17702E6, 0x56BF4BFC, 0xC67DA3B1, 0xCFE110D1,
        0xBF474131, 0xDEE6347E, 0xC589C278, 0xF1F99577, 0xFFDDEC3E, 0x8E67A94D, 0xB7805F5B, 0x6C731044,
    ],
    // seed 0x32
    [
        0xB943F1E0, 0xCBE32C4C, 0xD6174B14, 0x624F1792, 0xA63EF22E, 0x670484C1, 0xBD29EEAF, 0x2A8CDDFF,
        0xF2A9F1FC, 0x5CA260A8, 0xB9F19D53, 0xBC5205C0, 0x557D9081, 0x33E01F33, 0x0CF8830B, 0x6808AB7E,
    ],
    // seed 0x33
    [
        0x2C502BAE, 0xDEF3C69A, 0x7CE93F32, 0x8072478B, 0x8ABD037F, 0xD6B95358, 0x6ACF9BFD, 0x221FEBBE,
        0x54294284, 0xF5101DBA, 0xE4A140A5, 0x66086C2F, 0xC1BFC811, 0x64D65C34, 0x9C626FE0, 0x69E5D6E7,
    ],
    // seed 0x34
    [
        0x8B0D861B, 0xBDCBCDA5, 0x9FDAB141, 0xD8FFBF04, 0x1D840D57, 0x79B5DE33, 0x0FBAB783, 0x8592EB93,
        0x3ECC99A5, 0x6D2A1DD0, 0xA61DBDEC, 0x25B08C81, 0xE5AA2271, 0x399A7CF1, 0x4EB6D78C, 0x63D43F9F,
    ],
    // seed 0x35
    [
        0xC4CB5908, 0x8ED03833, 0x6F747304, 0xBB06EDB5, 0x41BBF2F4, 0x8C9DE46C, 0x03B8B325, 0x9878CB73,
        0xF694A2A2, 0x4AB147AB, 0x375A0E25, 0xFB788AB2, 0xE40E772B, 0x3B75DB61, 0xCDDBD5FC, 0x0BEE36BB,
    ],
    // seed 0x36
    [
        0x107BB490, 0x196BA8A4, 0x12ECA495, 0x9512A04A, 0x190345DA, 0xACAF2980, 0x09FE73DD, 0x13F4D7B8,
        0xE7733D81, 0xFF5199BE, 0x5DFB6849, 0x49CD0073, 0x5AF7300F, 0x620439C1, 0xD0731724, 0x955D4B04,
    ],
    // seed 0x37
    [
        0x2DD289AE, 0xA64F3B2F, 0x6D3EE6FF, 0x5AE11607, 0x6B9CB0E7, 0xA67D9074, 0xA4B8EF8F, 0xDCF9038C,
        0x652C4D91, 0xB8E6DC64, 0xF1B0BB9B, 0x634AE9D6, 0x40738F53, 0x7119DB7E, 0xB72DA137, 0x24AEE5C0,
    ],
    // seed 0x38
    [
        0xDC7BB5AF, 0xBF6C2ED4, 0xDE3DF914, 0x68B25BB5, 0x4295D137, 0x14FBDDF4, 0x0B9E891F, 0x7CF37FD2,
        0x676E055D, 0xD0E0A7F4, 0x409252E1, 0x66C3E3B8, 0xDB293291, 0xD400EECA, 0xB6414B8D, 0x16CC4E08,
    ],
    // seed 0x39
    [
        0x92CEE623, 0xB9C026F2, 0x1FB346FF, 0xEE26F3F9, 0x5FC9BADB, 0x55BDC0C8, 0x43C418FD, 0x633B2758,
        0xFAF8A0A5, 0x8925B4FC, 0x7DB3BA9C, 0x6F78A26C, 0x50BDE941, 0x76FD2654, 0xD5F3EB3B, 0x6C322571,
    ],
    // seed 0x3A
    [
        0x5CB9BF8A, 0xDEFF7029, 0x72C8AD27, 0x2EB0C78A, 0x8106058D, 0xB998DC7A, 0xEE15A88B, 0x4B22F87A,
        0x8B19F5F5, 0x57B86273, 0x34E8116D, 0x21B8394E, 0x6A148306, 0xAF65D25E, 0x2A69F37E, 0x6A5C0907,
    ],
    // seed 0x3B
    [
        0x40C69017, 0x4E0050A5, 0xCCB7FD36, 0xA6EACF5F, 0xD39DD32A, 0xA024D601, 0x8A57C054, 0xAB0E2895,
        0xA748FFDD, 0x592F747E, 0x4BE08653, 0x2FFAF5C9, 0x69205DAF, 0x2B8707AF, 0x42105A2C, 0x879F4C5A,
    ],
    // seed 0x3C
    [
        0x4AD8EDF1, 0x1E831EB5, 0x780DF307, 0xF74ED377, 0x58195E98, 0xEEA8C7A3, 0x2D480767, 0xDE93EC86,
        0x38514F7F, 0x1E53E515, 0x273636E2, 0x9AAC5379, 0xBFFE3119, 0x7E240F33, 0x6445BF6F, 0xAF6ED529,
    ],
    // seed 0x3D
    [
        0x2348BFA4, 0x01921037, 0x2FDB2CC0, 0xBC269F28, 0x144843DC, 0xA1EEC73A, 0x2D660558, 0x9A373C5F,
        0xFFC52ED1, 0xECD1F756, 0xFB941E8A, 0x8C2660B8, 0x509448EE, 0x460290A8, 0x9A33AEC6, 0xC34663CF,
    ],
    // seed 0x3E
    [
        0xF92790D9, 0xAF5C1E7F, 0x7D6C1D31, 0xAC8A6BDD, 0x39EBE5E7, 0x00491A7D, 0x149A7219, 0xC91D5402,
        0x2C4E0679, 0x965D4547, 0x6CAACE37, 0x1E7A7F49, 0xC33A38AB, 0xDCCA656D, 0xF7A9C568, 0x4978E25C,
    ],
    // seed 0x3F
    [
        0x1CC1F321, 0x6ECC95A2, 0x37248821, 0xA28AD266, 0x44B7488E, 0xF03E1154, 0xDDC57837, 0x034B93E0,
        0x242C0359, 0x1251321D, 0x82DA6AD0, 0xF5287601, 0xE7C43B4C, 0x6671FB83, 0x0B4E84DE, 0x71547AA4,
    ],
    // seed 0x40
    [
        0xE1798BF0, 0x0FB4DA6A, 0xC5094B08, 0x9A83280C, 0xEE7F8107, 0xC568C075, 0x7BBD2962, 0xCAD529C9,
        0x7A4F76E7, 0x92507243, 0x7C14B120, 0x938BE899, 0x33AB3860, 0xCCF765F0, 0xB053008A, 0xC2A1A0C5,
    ],
    // seed 0x41
    [
        0x6091E5E8, 0x43A83C56, 0x5D964983, 0xA1CAEE17, 0x1A2F2341, 0xC7242FF2, 0x8BF74A4D, 0x64C2B04F,
        0x2BDBF6D5, 0x2EA05A08, 0x4A0E113E, 0xE4C0AA0F, 0x9095F94B, 0x26FC1438, 0x39115B31, 0xB7E705D8,
    ],
    // seed 0x42
    [
        0x08D13ECE, 0x20114848, 0x4C5FF309, 0x65C32B02, 0x234657FF, 0xAD724085, 0xB9C426AC, 0x39C597BA,
        0xBCD7AC01, 0x64A7C98B, 0x9FCD2426, 0x62C2BB4B, 0xD1A045D0, 0x48399CC9, 0x6AC077D1, 0xCF05245A,
    ],
    // seed 0x43
    [
        0xC830BEAC, 0xCA75F1E6, 0xB005F403, 0x5647E395, 0x44C39735, 0x709C22B2, 0x604EBB77, 0x859AA36B,
        0x57327914, 0x5E9977AD, 0x4AC6C43D, 0xEF2A6D3E, 0x0270673A, 0xAED60883, 0x36005A7F, 0x3A5D641D,
    ],
    // seed 0x44
    [
        0xAEFD7258, 0x44F76A98, 0xA50519B5, 0x9E51BF1D, 0x093EEEA9, 0x0A0FBE04, 0x049EA6B9, 0x20663F1A,
        0xA0324A07, 0x56212B67, 0xA3E45305, 0xAC181801, 0x36554486, 0xB02D079B, 0xFCF57A27, 0x93645C9D,
    ],
    // seed 0x45
    [
        0xF9F3C97D, 0xBD482A6F, 0x51228EC9, 0xB63CD0A9, 0xD06D84E3, 0x43C4703B, 0xD605F8CD, 0x9294479B,
        0x86836B2B, 0x5EB84CE3, 0x6E6604C2, 0x00BCDA80, 0x13F9586B, 0x27F5C957, 0x4FEF7036, 0xF93C531F,
    ],
    // seed 0x46
    [
        0x7888F75F, 0x52DD6221, 0xD9043301, 0x8477C9EC, 0x4C7BF415, 0x3DFD17B7, 0x07583102, 0xE5566FEC,
        0x0CF2B0EF, 0xE1DB77F4, 0x3DC2A1B7, 0xA222ADA6, 0x57FA2B18, 0x2DCE5654, 0x8136211F, 0xB55EA9CD,
    ],
    // seed 0x47
    [
        0x42068AB4, 0x7FDF7784, 0x8EB3EA7A, 0xF789F5D6, 0x89E5C3B5, 0x70742373, 0x73EA38D7, 0xC90B74FC,
        0xBF9E45AA, 0x4FEC79BC, 0xCD9510C2, 0x1432F49B, 0xCD982CC3, 0x647249AE, 0x4778A1CD, 0x363608B9,
    ],
    // seed 0x48
    [
        0x49231A6A, 0xBF221911, 0x51A932C5, 0xCE3DADCF, 0x6C287EC7, 0x5E1E8C07, 0x95C21AA8, 0x783C8CA2,
        0xD0598E69, 0xC0A51A4B, 0xE7C64BBA, 0xF3219B70, 0xC8DCFFF3, 0xF831F50C, 0xA0125699, 0xD53DD981,
    ],
    // seed 0x49
    [
        0x4CD95103, 0x6168E42E, 0x09C65FF7, 0xA64B61CB, 0x4AC8656A, 0x4C8D446F, 0x7B780541, 0x3ACE23B3,
        0x482002DF, 0x448595E8, 0x1BF598EB, 0xFC6BEB55, 0x5EF6FC57, 0xC1BEC652, 0x3DDE0128, 0xB5EB1A7E,
    ],
    // seed 0x4A
    [
        0x241FCECD, 0x20F90613, 0xAC6F81D9, 0xDFDC569A, 0x6D38FA99, 0x734126D5, 0xCB88FC5A, 0xC51DBC0B,
        0x38C53C01, 0x20914D4E, 0x2A8E3BE7, 0x9BFC9F61, 0xD906E2A8, 0xDEADE739, 0xDD200814, 0x47FCB2D3,
    ],
    // seed 0x4B
    [
        0xAFB53946, 0xB1D3448E, 0xABA16EA5, 0x828F4185, 0x03AD6F8E, 0x326A29F3, 0xCC15FFD8, 0x77766C84,
        0x86A6B677, 0xF40D8216, 0x8E1C4863, 0x472BBED1, 0xDD30D761, 0xFCA5BC25, 0x75BB9057, 0x7337C3D0,
    ],
    // seed 0x4C
    [
        0x0B156A62, 0xE9DC7A4F, 0xCD854EDD, 0xB7A1A7A5, 0x6AACE341, 0x666C588F, 0xB784087D, 0xF3AA1E48,
        0x129BC440, 0x4A5C088C, 0x9BADBB17, 0x4811C9C3, 0xD033E4DA, 0x16D01DD4, 0xD18CF235, 0xFC0496A0,
    ],
    // seed 0x4D
    [
        0x4DA0943A, 0xABF97A1B, 0xDB7E56E3, 0x8EE633AA, 0x98677D3A, 0x8C7B02A0, 0x7CB7713A, 0xDEB116C1,
        0xBB6542D0, 0xBE81EFE6, 0xB9F423A5, 0x6BBFD826, 0x96E51792, 0xD82E7370, 0x1E1C879A, 0xF31B694F,
    ],
    // seed 0x4E
    [
        0x5433B548, 0x40043932, 0x67C9025A, 0x14F48871, 0x3A66AA10, 0xD8A55D66, 0xE87557CC, 0xAE5005E4,
        0x7A0FDA21, 0x62D008ED, 0xBE1B51D1, 0xDDD82CEB, 0x2399C5D5, 0xA7AF4AB9, 0x451F0E9C, 0x4B1B201E,
    ],
    // seed 0x4F
    [
        0x1CC9AAC9, 0x11F4139E, 0xC4730D16, 0x96F13D71, 0x29A90137, 0xE8FCA8CB, 0x699CEE87, 0xC322C608,
        0x0FECCFE7, 0x1BA7A48C, 0x1F88C2C4, 0x1CB62BD7, 0xCBFF1C43, 0xDF5D9BD3, 0xFF59B121, 0xF999F7B6,
    ],
    // seed 0x50
    [
        0x7FFBEB84, 0xB37BE794, 0x9320C68A, 0x2966A618, 0xE01B7716, 0xA980CEF8, 0xA5482738, 0x5F587043,
        0x0117411C, 0x36DB5818, 0x08D6A809, 0xA70A0F79, 0x3C4FF68C, 0xFFA713BC, 0xFABDBF76, 0xD659A15D,
    ],
    // seed 0x51
    [
        0x7FDA615E, 0x16899A85, 0x5CCEF4CD, 0xB8970AEB, 0x21F28E5E, 0x9AC99238, 0x61CB8463, 0x68A4CDA6,
        0x8815FDF4, 0x24DD58E0, 0x8A01A5B9, 0x20593533, 0x46ADB46D, 0xC52883FA, 0xEFE791F2, 0x7E7927C9,
    ],
    // seed 0x52
    [
        0xE8FCDCED, 0x3561F85E, 0xC4C673C5, 0xDB8A139B, 0x1E7AEC42, 0x8C0BD6B7, 0xFEE31500, 0xFDDDBB66,
        0xCEBE0174, 0x1A099228, 0x23F812A7, 0xD52051D8, 0xE3B20D1D, 0x7464013E, 0xD226FF9A, 0x1D9AAB07,
    ],
    // seed 0x53
    [
        0xE00A4543, 0x71736399, 0x65A6E1AF, 0xB0965ECB, 0xA04B8A6D, 0x6EAF1080, 0x9F69B7A6, 0x5E91C046,
        0xB92E395B, 0x31E48CF7, 0x8794A697, 0xB9AE810F, 0x88493270, 0x789DC5B6, 0xBBCC5F62, 0xEFFF8DA6,
    ],
    // seed 0x54
    [
        0x2C120857, 0x48CE7470, 0x71FA8B33, 0x0428199D, 0xCA4C2123, 0x7C92BC33, 0x605954EA, 0x031BA030,
        0xAAB34D37, 0xF2289EBF, 0x8CEDE806, 0xA16363E6, 0xDCA2F3DD, 0x0DAAD68C, 0xD42FFECA, 0x73A0AB68,
    ],
    // seed 0x55
    [
        0x84CC618F, 0x2AD56685, 0x1E3E6200, 0x1997E786, 0xAFFB582E, 0xF88C30B4, 0xE731BF92, 0xB6F972E2,
        0x8D82D028, 0x0C1907CA, 0x12E2566D, 0xE2AA62A0, 0xA5B93705, 0x0CED4C65, 0x09BE2792, 0x83323B54,
    ],
    // seed 0x56
    [
        0x7DFD3EDD, 0x94B2F80C, 0x5D932603, 0x8B0ABAC8, 0x7C75B184, 0x0D1E63E2, 0x79099DFD, 0x9005F6C0,
        0x233DF3AF, 0x715E9092, 0xD127A00A, 0x77D19982, 0x61BF1414, 0x91BF66CE, 0x9A14FC84, 0x42A97847,
    ],
    // seed 0x57
    [
        0xFFA64691, 0x91E91A67, 0x0A907130, 0x24AC1BA0, 0xDC78E434, 0x48E0BEDC, 0x629DDD88, 0x4AEA5016,
        0xA61327CC, 0x18987B88, 0x2844B470, 0xB40259AA, 0x41009237, 0x81BDB37E, 0x3B0B46F6, 0x0A50DBC7,
    ],
    // seed 0x58
    [
        0x82D36977, 0xA15FE47B, 0x817037C9, 0xB59A0169, 0xECF5D164, 0x0426E241, 0xA5184781, 0x80F8480C,
        0xAE6D6401, 0xCDF8758E, 0x318A69F8, 0xBCB5ECD7, 0xC01A1E32, 0x8C01EC5B, 0xABCAD650, 0xD4B831C5,
    ],
    // seed 0x59
    [
        0xB7093720, 0x076805AD, 0xE55D5671, 0x929BFC4C, 0x3D9C886B, 0xB5AEA120, 0xDCE10FB0, 0x80AF987A,
        0x80AFD65F, 0x9E66B547, 0x9F918C92, 0xDCD5B8B2, 0x8CCAE36A, 0x4CEBC0E3, 0x7AB4E07D, 0xEFE88F45,
    ],
    // seed 0x5A
    [
        0xAEF7C6CA, 0x7259ED4B, 0x162CF4A1, 0x6D1B503B, 0xCBF6F26F, 0xC826426E, 0xE3B299B0, 0xED4F1D91,
        0x24138448, 0xA14CF8F7, 0x90D28959, 0x9529253F, 0xAE5C52DF, 0xE230EE24, 0x43D2E3AD, 0x7E820D44,
    ],
    // seed 0x5B
    [
        0x83EDA714, 0xDE80331D, 0x8ED953F8, 0xE1D3F53F, 0xF87FE6E3, 0xE089396C, 0x21271ED8, 0xAFF2D658,
        0xEFB54E7A, 0x01EB9C5E, 0xF074E990, 0xFFEC4700, 0x260D3056, 0xA89B6F7F, 0xBA37839A, 0xB6421B96,
    ],
    // seed 0x5C
    [
        0x48DD588C, 0x3F193641, 0x7BC70549, 0x62ECFB18, 0x98E33D14, 0x13C9742F, 0x29D92AD8, 0x430027AE,
        0x59863C28, 0xD68214C4, 0xB0C0AC2C, 0x882EC173, 0x29F72649, 0xE47E1912, 0x2A47594A, 0x06C7F3D9,
    ],
    // seed 0x5D
    [
        0xF355E3A5, 0xC18D5C6D, 0x1077EE7B, 0xFF8FF35A, 0x3582FE50, 0x5C87F756, 0x3AB95F56, 0x834F5995,
        0x55F95351, 0x049B2766, 0x6E6831AA, 0xDDF1D33F, 0x033DC5ED, 0x2C1D35AE, 0x6318461D, 0x7502AA30,
    ],
    // seed 0x5E
    [
        0xE766850F, 0xEEFE120D, 0x8A6B1CB2, 0xDA3C6163, 0x386BF75D, 0x45992C91, 0x38EED7B0, 0x635BAA9B,
        0x9E2710C4, 0xA8C6FFB8, 0x957100AA, 0xB652C8CF, 0x3305C31C, 0x53C513AE, 0xAB32AE30, 0x79A874F8,
    ],
    // seed 0x5F
    [
        0xCFB819F9, 0xCBA48C92, 0x9F5F830F, 0x42DF08F8, 0xD4A502F3, 0x5473D4CD, 0xC4BCE228, 0x2FC0F205,
        0x992834B0, 0x632D27F4, 0x00133AD7, 0xAF2CB139, 0x5265D3B6, 0x11324C63, 0x694EFE2E, 0xF4CA1239,
    ],
    // seed 0x60
    [
        0x8A76495B, 0x1C2C0723, 0xC369AC3F, 0xFD5DCC8D, 0x646A5A2E, 0x394CF2F1, 0xC8B4F819, 0x19AC2DBD,
        0xF764860E, 0xB4B43B91, 0xEFC450E4, 0x07B02711, 0x4042FA8B, 0xEF7F1351, 0x7887A2F5, 0x845195A1,
    ],
    // seed 0x61
    [
        0x34E68D1E, 0xDED613E5, 0x41964360, 0xF3C36E9B, 0x78F7B202, 0x401F4235, 0x4AA04688, 0xAD976CAF,
        0x93A63983, 0xFEBBC2DD, 0x6025EF2B, 0xF8D10769, 0x89521877, 0xC2E098D7, 0xCB9BB422, 0xF792512E,
    ],
    // seed 0x62
    [
        0x2F5E1C2D, 0x039A29A4, 0x274E6862, 0xFB7302E7, 0x2059BD5D, 0xE0390DF3, 0x93F952DB, 0x12810DCF,
        0x125AC7AD, 0x3B73E68B, 0x9AD70C8B, 0x0FCF9E8A, 0x6FA996BF, 0xD1F2E136, 0xF12863B0, 0x10091C2C,
    ],
    // seed 0x63
    [
        0x279CB5EC, 0x9A461606, 0x4A50BE14, 0x037AF2C1, 0x153E49CF, 0x3F36F4D1, 0x4EDA3EA2, 0x1F47008F,
        0xA5769384, 0xEEB9BCCA, 0x3F29F32E, 0x5D2800B1, 0xE639422B, 0x67F4F972, 0x060C4675, 0xC169080E,
    ],
    // seed 0x64
    [
        0xD3F030F0, 0x9C3080DD, 0x406A657C, 0xF9A74135, 0xAD2045E4, 0x3BCDA0C3, 0x5196F36E, 0x431AC610,
        0x24B8D70D, 0x2C3DB2DF, 0x5D9227F1, 0xF82A85AE, 0x3288E6AA, 0x5455205D, 0xA29BC1F1, 0x08F25775,
    ],
    // seed 0x65
    [
        0x876DA6C3, 0x72CAB2E0, 0x7A9DB389, 0x2F2314C2, 0x92D5F7E7, 0x37BCA0CE, 0xB2A6A546, 0x5A6B54E3,
        0x3E6166D4, 0x453A46BF, 0xBCE91C4A, 0x2F6EB107, 0x95D31251, 0xA1A764A2, 0xCDEF2D4D, 0x6F5FD371,
    ],
    // seed 0x66
    [
        0x3996D0DA, 0xF7181634, 0x659CE9A5, 0xE3A72ED8, 0x05D6CB37, 0x7278DDE0, 0xACBC2199, 0x8F9A665C,
        0x52C0CCDE, 0x1662CEEE, 0x66F84D3F, 0x4FEDC11A, 0xBDE454C1, 0x2B396A6C, 0x1A052FBC, 0x2F9AF79E,
    ],
    // seed 0x67
    [
        0x2658813F, 0x0660AE69, 0x2E554416, 0xBD1977E6, 0x93FC3388, 0xCBD00A2C, 0xE388FDE4, 0xE0F21C7D,
        0x78376CBD, 0x3C5E8070, 0xBCD33576, 0xD75414DE, 0xB926AC07, 0x5A8F3A59, 0x3D8201E2, 0xF58FFBFE,
    ],
    // seed 0x68
    [
        0x8FCE41AD, 0xF56471CB, 0x60ADADCF, 0x4346A20A, 0x47D7B930, 0x6931F162, 0xB1F7F77E, 0xD57D54FD,
        0xF347807E, 0x95A9AD1D, 0xEEE13CDB, 0xC678D9E3, 0x5381A819, 0x113796C2, 0xC4089856, 0x0C5EE854,
    ],
    // seed 0x69
    [
        0x9CCE3C3F, 0x72F33D19, 0xBCBDB33B, 0x34CD58FC, 0x9C4710C0, 0xCB8EB3DC, 0x4E4A8932, 0x2A93F280,
        0xE2F1BFE5, 0x6AFA90CD, 0x69795E2D, 0x60161BCE, 0xF3B0EDB7, 0x6E8491B3, 0xC677D70C, 0x8724BA0A,
    ],
    // seed 0x6A
    [
        0xC7E39204, 0xAE0220E3, 0x3F4F5EA3, 0x9E310C8A, 0x6934E256, 0x592ACB7C, 0x8B56AEF2, 0xD02417A3,
        0xEEDD5C7E, 0x24E51F78, 0xDEC75280, 0x8A6C5147, 0xD5D18328, 0x93AC9FCA, 0xA372A40C, 0x33E4BB71,
    ],
    // seed 0x6B
    [
        0x9B3369BA, 0xF18D3FB0, 0x308BC20C, 0xB402D3F5, 0xF4AE9A42, 0xFF27A156, 0xCB84C0D4, 0x8691563B,
        0xC3CC0E3E, 0x179A12FC, 0xCBCDBCA6, 0xFFE55153, 0xD706EFE7, 0x41DF6466, 0xEAEA9482, 0x88C55868,
    ],
    // seed 0x6C
    [
        0x277772E2, 0x716D1D51, 0xC4BE1611, 0x225D1F26, 0x9EDFE850, 0x709B3BE3, 0x4A630E20, 0x6D50C81D,
        0x76E5B0EA, 0x21FC9260, 0x9D56811B, 0xF74B8137, 0x5782C2E4, 0xF38E720A, 0xCFE6799E, 0x3688882C,
    ],
    // seed 0x6D
    [
        0x626357C7, 0x42D9C81D, 0x8BA0206A, 0x28186856, 0x78174B92, 0x040378BC, 0xD476B8F5, 0x68D69445,
        0x34473B9B, 0x606874CF, 0x337A3A10, 0xF61DBA85, 0xCB74E259, 0xB9172123, 0xAD2BD7A8, 0x03BE8231,
    ],
    // seed 0x6E
    [
        0xC28E573F, 0xB4FE5B97, 0xF4816F4D, 0x5B5D0CD0, 0x320FD077, 0x31D6DAAF, 0xABD91B0E, 0x1A684E2E,
        0x1A80EFBE, 0xA6D1569C, 0xF9E3B341, 0x2D399BBB, 0xBCCC61C8, 0xE89D4441, 0xA31378B6, 0x0C5B8C5E,
    ],
    // seed 0x6F
    [
        0xCC2A3125, 0x655E1AEC, 0x2D604FEA, 0xD4DED4CB, 0x76FCB491, 0x61FEE509, 0x3449B84F, 0x0036C507,
        0x7F257DE2, 0xEA0224A8, 0xE4FC7219, 0xA5A3BCF3, 0x3B826871, 0x51EF5E3F, 0x50D2420D, 0x6B7E0C5F,
    ],
    // seed 0x70
    [
        0xD393265E, 0xFCF09E40, 0x151C0445, 0x47220046, 0x9E8D6B1F, 0x85662C8B, 0x6B70B3F7, 0xEEFD5C18,
        0xA1E15CAB, 0x9722BBDC, 0xEDEC7344, 0x4D4D3AD8, 0xE449AFE7, 0x278012C9, 0x772E0EE9, 0xB4A55A9F,
    ],
    // seed 0x71
    [
        0x71BBD199, 0x1DD19910, 0xF5B863DB, 0x14CDBF27, 0xBAFFED8A, 0xD9A70129, 0x57AC9D7C, 0x61288E46,
        0x47A38CBB, 0x032EFCC8, 0x7300645A, 0x43D13894, 0xB9E5FBE1, 0x6DD41DD5, 0x3C49D9F0, 0x58CE511B,
    ],
    // seed 0x72
    [
        0x38EF8524, 0x0CA25145, 0x2866654A, 0xC3809328, 0x0BA96A48, 0x3F9585BD, 0x40C3D818, 0xDB994790,
        0x2249F3FA, 0x8551D183, 0x2FA87D76, 0x08A1B4E9, 0x000A7B17, 0xB4AA0676, 0x01CAE82F, 0x6E2E9988,
    ],
    // seed 0x73
    [
        0x2F5A65E9, 0x4089175D, 0x7DB4B90B, 0x139D5DB7, 0x69063F47, 0x176CDDF1, 0xB816230C, 0xDB0D3B01,
        0x73159EC4, 0xB4CE20E4, 0x72CC2001, 0x68B6E1F4, 0x820E9003, 0xCA6B0729, 0x50E14F0D, 0x777F76B8,
    ],
    // seed 0x74
    [
        0x666CA860, 0xC942AFF6, 0xB67C77AB, 0xF41F933F, 0x26766DAF, 0x8F0EB6AE, 0x90B224C2, 0x704451CB,
        0x711059CE, 0xEA5C4817, 0xC3D68303, 0xBB136794, 0x835A818C, 0xCAB94B80, 0xB30635E7, 0x834165B3,
    ],
    // seed 0x75
    [
        0xAD5569F7, 0xD3A9852A, 0xBE21F843, 0xFED2AF55, 0x58C589A0, 0xB6806E79, 0x9953AC26, 0x88423D0C,
        0xAC079010, 0xB3B79A4A, 0xB24CEDA0, 0xF4FC01F5, 0x2585FA92, 0x8E7BCC89, 0x314FCC92, 0x7DD42AC0,
    ],
    // seed 0x76
    [
        0xF0027C3D, 0x1A4C05D0, 0x7555D64F, 0xE4F19344, 0x3E32BC66, 0x19C1C6B2, 0x0002DD16, 0x99008482,
        0x2275B343, 0x07EC5CB3, 0x881B2C60, 0x32A01EAE, 0x66E1E864, 0xEEB1A3B6, 0x16742F05, 0xAB9A4851,
    ],
    // seed 0x77
    [
        0xE4FF1D2C, 0x06F82D7E, 0xC23F1940, 0x662FD23A, 0x42DA2982, 0x10B525EF, 0xD0754B92, 0x4964587C,
        0x7C822CFB, 0xBB4EDC45, 0x483061DB, 0xA4CADE54, 0x91DBA59C, 0xF15B7941, 0x07C75058, 0x9F03F4C6,
    ],
    // seed 0x78
    [
        0x02B77646, 0xA7975454, 0xE01632BC, 0xC259393E, 0x17A74AB9, 0xD0EC83E9, 0xABAAA000, 0x61F6D853,
        0xBBBFA2B8, 0xEE32DFA9, 0xD9069A5E, 0x7C520909, 0x8DC64336, 0xC213D8F3, 0x8D68457C, 0xFD65F9C7,
    ],
    // seed 0x79
    [
        0x6902D905, 0x240B1283, 0xA26D125D, 0xB1EE428E, 0xE9B898FF, 0x52D3FA83, 0xA6BA285C, 0xFFB8111E,
        0xC438861C, 0x529032DF, 0xAB344522, 0x1D490F1D, 0x801BAEE9, 0x81EAE7B2, 0x147E6DB5, 0x705E9E75,
    ],
    // seed 0x7A
    [
        0xAC7248C1, 0x2E852637, 0xAA7902DF, 0x4EB2F0CF, 0xE88B77E5, 0xAA6A54DC, 0x3CC7F888, 0x194F93A2,
        0xC3A77F5C, 0xFA61F57A, 0x8BAAB117, 0x888D415C, 0x86705447, 0x313EB620, 0x7FFBC9F7, 0xD04C3E8F,
    ],
    // seed 0x7B
    [
        0x24189595, 0xBE9BAF30, 0xB21BA5E4, 0x2DC39316, 0x42297314, 0xBEA25226, 0xE0DD9F6D, 0x40832119,
        0x6EA929AF, 0x5F987050, 0x8C9C3B42, 0x03818D30, 0x068BF90A, 0x57B74BA1, 0x534E41C7, 0xC287E167,
    ],
    // seed 0x7C
    [
        0x4A2A4EC3, 0xA2BDCF80, 0x2E7738C2, 0x60F878C6, 0x8550B07D, 0xAA738B26, 0xD9D09550, 0x4DDC64CB,
        0xBBC151D0, 0x875EA10E, 0x83BD66A0, 0x7726D884, 0xC602C1A7, 0xF7B9FC8D, 0x7F43E8C6, 0xB89D3344,
    ],
    // seed 0x7D
    [
        0x1FFAC49A, 0x7A160EB3, 0x750CC60E, 0x3A1CDF50, 0xCD007600, 0x1114B02B, 0xE18DBAC1, 0x223370DB,
        0xAA9687DC, 0x98EAD835, 0x4FAD32C8, 0xD26C83FF, 0xC5D5F96E, 0x9ABCEEC4, 0x3B9EC020, 0x150E90C1,
    ],
    // seed 0x7E
    [
        0xBDFDF3B4, 0x20A73E6D, 0xCA8C5176, 0xFD97EF9F, 0xA8643AF7, 0xCE5C9B60, 0x824795DA, 0x3A352518,
        0x79AE23A2, 0xE405D381, 0xD20FD5C4, 0xF1EB0E34, 0x3192679E, 0x415F49A2, 0xA72DB0BD, 0x17740E84,
    ],
    // seed 0x7F
    [
        0xADFC28D6, 0xA5A1D68B, 0x416F220B, 0x0B46DEB4, 0x5EF7CC0C, 0x6FDDC02A, 0x9A62C436, 0x31E17E7D,
        0xD63033E8, 0xFE964903, 0xE8D7FBB6, 0x5D350D23, 0xBEE85C10, 0x25BD0EB5, 0x9A6E581D, 0x4F92E9EB,
    ],
    // seed 0x80
    [
        0x49DE1013, 0x790D56F9, 0x290F7A11, 0x367CF849, 0x8E6557C4, 0xBED0EE06, 0x90FE23EC, 0xB4659941,
        0xF2E05104, 0x1D9DA243, 0xC8920944, 0x10C94D97, 0x00B10337, 0x5EA83919, 0xAB01B430, 0x9FB4279F,
    ],
    // seed 0x81
    [
        0x8E43A4C4, 0xA5E867F5, 0x4BE5A699, 0xD3C8E93B, 0x1371D339, 0x7967047B, 0xFE29E6AC, 0x312303D8,
        0x9AC26F92, 0x1CDA730A, 0xFD606CCE, 0x77493ED2, 0xA2DF80E3, 0x366A9100, 0x050E61E0, 0xE1B1C1FC,
    ],
    // seed 0x82
    [
        0x179372F3, 0x50B7197A, 0x8CC48710, 0x21B0CB9B, 0x3BBC5CC5, 0xDFD0134F, 0x9AC34284, 0x03F1ABFB,
        0x8DB48C1A, 0x03EB919B, 0xEEC92869, 0xB8E4D2C9, 0x0E7589E2, 0xB16E2D8D, 0xA3045BD8, 0x76909E2D,
    ],
    // seed 0x83
    [
        0xF0D04F5C, 0x7ABA3466, 0x7CBFF1CF, 0x35C6056D, 0xF7DF40E2, 0xAF8F33D0, 0x1A1564C0, 0xD183447A,
        0x10133E9F, 0x69928871, 0x3A79A51B, 0xF2B6AC43, 0x445837F7, 0xA584E53B, 0xE5E9864A, 0x4D332D41,
    ],
    // seed 0x84
    [
        0xA68F8E2B, 0x980FB442, 0x6DF77FFD, 0xF1B71F48, 0x2ECE9C77, 0x5900E288, 0x4A099966, 0x945CCA5B,
        0x65C46A58, 0xCA3397F5, 0xECB2508B, 0x153D0A53, 0x607A9527, 0x6F908C20, 0xCB7A227F, 0xE8851205,
    ],
    // seed 0x85
    [
        0xE124FEB4, 0xC10B56AC, 0x5A37D6AA, 0xB2DA2DF2, 0xDD6240D9, 0xEC23DC7C, 0xE56835B4, 0x8996FD44,
        0x75094B44, 0xFD4D3201, 0xC3EDA809, 0x951F5E11, 0x20B44FEC, 0xE54449B7, 0x8527ADAB, 0xDE07E848,
    ],
    // seed 0x86
    [
        0xF2CC51FE, 0xAAF75762, 0x64540742, 0x3ADF7872, 0xB922CDC9, 0x1B3A46CA, 0xFD2F8DA7, 0x08D2E4D4,
        0x7FA81805, 0x012C8BB6, 0xD2A31C9B, 0xF6CB3D1B, 0x3E6723CF, 0x1794F82D, 0x51833D74, 0x21AC3592,
    ],
    // seed 0x87
    [
        0x3890D982, 0x0751D8C9, 0x0739DB31, 0x19F89829, 0x4DD9BBE4, 0xDA3CD8F7, 0xCE44A28C, 0x17D8AB49,
        0xFBE83B6F, 0x04001467, 0xD35B0552, 0x2064BF12, 0x1B0B342A, 0x1175947C, 0x6FCB73A4, 0x049C8F50,
    ],
    // seed 0x88
    [
        0xBBA49221, 0x4D0DC1F3, 0x8F06483C, 0x839EB99A, 0x515CF871, 0x7689C179, 0xFCAB0ED1, 0x08478FB0,
        0xBD929699, 0x9E5BCD82, 0xC3693FB3, 0x5A5FC986, 0xBA2661BB, 0xEB2A8861, 0x6399CA67, 0x99A7E253,
    ],
    // seed 0x89
    [
        0xB2E3D300, 0xF123EEC3, 0x494F6DA5, 0xE95F81EE, 0x80792694, 0xCCF19EB4, 0xA989949B, 0x0A0AA5A5,
        0x815AF411, 0xC2F5F84B, 0xF1C5D1C6, 0x67580589, 0x4638545D, 0x22B1B5D8, 0xA664BB4A, 0x886F7E76,
    ],
    // seed 0x8A
    [
        0x9BE6F0F0, 0x7DCEC4C0, 0x67A92CFC, 0xE1F17EAE, 0x02C4E617, 0x7C29371E, 0x585CDC5A, 0xFBB6CE04,
        0xB83A9E23, 0x1A410132, 0x01D41177, 0xA53A2F44, 0xCDE2F1A4, 0x9FD69738, 0x586CE298, 0xE0E54021,
    ],
    // seed 0x8B
    [
        0x04C19E15, 0x2F57EC7E, 0x324C4E75, 0xAD470048, 0x7DE90C77, 0xC0181524, 0x3D100942, 0x5DB70C31,
        0x42F82913, 0x08C2D738, 0x2A52D5F3, 0x1BF2254D, 0x65426E69, 0x7A011394, 0xFAF7F324, 0xE02242E6,
    ],
    // seed 0x8C
    [
        0x2F672F46, 0x3455788B, 0x2B1751B4, 0xF7C1FD23, 0x42AC9CD5, 0x866EA970, 0x900CA364, 0xE0C0833C,
        0xC5095322, 0x6F760FDA, 0xFFE1B74F, 0x1BC8D47A, 0x4CFF1B3D, 0xE0176878, 0xE429AA19, 0x7DF810D4,
    ],
    // seed 0x8D
    [
        0x86488438, 0x0CF473EB, 0x138469DD, 0xF728A20A, 0xB266ADA0, 0x28886C24, 0x2D245404, 0x0BB30940,
        0x108B8961, 0x88E944B3, 0x395D4737, 0x4B2DA198, 0xF1A92FAD, 0x2323A565, 0x349F7079, 0xF7576EF3,
    ],
    // seed 0x8E
    [
        0x54164BDD, 0x11F0AC3C, 0xBEB8DE12, 0xBD44CCCB, 0x2AE9E706, 0x12112E00, 0x8D642CDD, 0x673ABEFB,
        0x041B4FB0, 0xF3EE2667, 0x3113F2EB, 0x3AA2AD44, 0xB504CB2A, 0x21D43E4A, 0x7F58D36C, 0xB3A9E67B,
    ],
    // seed 0x8F
    [
        0x17F88CB3, 0x1C4CD023, 0x44CC324A, 0x8BD966C8, 0x926430AC, 0xAE9656B8, 0x467AAB71, 0x83EAAA03,
        0x23070C2F, 0x43E67662, 0x29117F09, 0x2F041BA4, 0xDED0AC35, 0x2FFEEC0F, 0x24B935A9, 0xED123376,
    ],
    // seed 0x90
    [
        0x30120D05, 0xEDF5B91C, 0x13089507, 0x5AF13653, 0x6982EA04, 0xA878A9A1, 0x998188F8, 0x1BE804C2,
        0x1BFB415B, 0x441C22B9, 0x55391404, 0x3011B2B6, 0x147FCB87, 0xFAFFDC2F, 0x1EF989C8, 0xDC97A581,
    ],
    // seed 0x91
    [
        0xD2DB5E5D, 0xFB3EF9B7, 0x256FA779, 0x0FF0E491, 0x164EB6BC, 0x8E705045, 0x89D52ED8, 0x9296CB22,
        0xA49E0154, 0xD92AE86F, 0x1F13D6C5, 0xCE5C606B, 0xD3CD2142, 0x9E6BFCD5, 0x6675F36A, 0xE38648A0,
    ],
    // seed 0x92
    [
        0x0997BAF8, 0x63B8AB8A, 0x32C01349, 0x8484FA96, 0x9039D107, 0x8A3D9840, 0xC13EF310, 0xA5203D6B,
        0x75502CDA, 0x60387761, 0x223D3E93, 0x9315022A, 0xD901A959, 0x31F2EBCB, 0x4E1F7290, 0x6086DE1D,
    ],
    // seed 0x93
    [
        0xDF6CF199, 0xB12D16FB, 0x29094A79, 0x6B3FA250, 0x1FB92B91, 0x35F8040F, 0x1B853173, 0x71538883,
        0xECD1BBD3, 0x5B3CE0D8, 0x0C06120A, 0x342666A5, 0x9E378DE7, 0x5DC6744B, 0x89104176, 0x94CFAF7F,
    ],
    // seed 0x94
    [
        0x9AA5C8B5, 0x9A0A4F5A, 0x3057447E, 0x5FC3A9CD, 0xF3CD21E2, 0x83FFE8C4, 0x155C2DBC, 0xFFB9327C,
        0x130CDF1C, 0xF5BDD120, 0xAB1B737B, 0x02E8DC4E, 0xCCD000A1, 0x5F1307D4, 0xDEECAE9A, 0x72740AC4,
    ],
    // seed 0x95
    [
        0x0550E06A, 0xD07BE8E1, 0x15C15ECC, 0x8015BE28, 0x0C265E97, 0x7D905920, 0x77A150FE, 0xFA7AEC8B,
        0xC89AC504, 0x8A5AB570, 0x0F39CD12, 0x738C4154, 0x554B7DE0, 0x89B68E9A, 0x19868D0F, 0x8C4C7D46,
    ],
    // seed 0x96
    [
        0x43145D42, 0x5BE7D3A8, 0xA6A69963, 0x83CFD253, 0x4BF7A1D9, 0xA452EAE9, 0x6184F6FC, 0xBD86C316,
        0x48EC8582, 0x6036FC5F, 0x79F6E5EE, 0x3173FB57, 0x1B72DD25, 0x84032581, 0xB8185703, 0x856DEA22,
    ],
    // seed 0x97
    [
        0x462C1A53, 0x3EEFBA22, 0x06A07597, 0x66EE6527, 0x237C525E, 0x0225E6EB, 0xCC9B0C1F, 0x8FAE216F,
        0xB99BC7C1, 0x11522EE1, 0xD7238F8E, 0x857BEE5A, 0xDB575880, 0x82B6A6DE, 0x2706D38F, 0x695EBDD8,
    ],
    // seed 0x98
    [
        0x4F29DD24, 0x131CD513, 0xC71EE13C, 0x3A731C28, 0xCC62C36A, 0xAA4898FC, 0xCCEFA0E3, 0x09682106,
        0xED6E1CC4, 0xB3505E22, 0x602D1CBA, 0x7C3C751C, 0x56E025FC, 0xB6FA30FF, 0x96FE9A6B, 0x776F9633,
    ],
    // seed 0x99
    [
        0x1D011484, 0x4131E34D, 0xAE548940, 0x6ED59A36, 0x5A068875, 0x91ADA549, 0x3271C6D6, 0x93022743,
        0xC0B14CC8, 0x441BAFFB, 0xF315BE65, 0x3F0F2348, 0x419263BC, 0x01EB3F7E, 0x80D09E3B, 0xB58FA4C0,
    ],
    // seed 0x9A
    [
        0x60F256AF, 0xAF762A42, 0xD7193379, 0x50529D3B, 0x424E2E24, 0xC1C2D1E9, 0xA092F946, 0xCBBF24F9,
        0x18CA549E, 0xA403FDA4, 0x90112BC8, 0x31BC61FD, 0xFD1F87AA, 0xF3098B95, 0xE728B718, 0x92DA5FDF,
    ],
    // seed 0x9B
    [
        0xC4B0A466, 0x81C172CD, 0x8AE32113, 0xC4CD5B84, 0x150CBC31, 0x121BF273, 0x06D0AC6A, 0xC065D6C2,
        0x46CB2785, 0x101B730C, 0x9F5D2473, 0xE0AF5BD4, 0x529F9670, 0xE4E20E19, 0xAA39461B, 0xDD36A2C8,
    ],
    // seed 0x9C
    [
        0xD07F2B0C, 0xC182CE72, 0xD3FADA0C, 0x2961B195, 0x10B7AAF5, 0x313A17DC, 0x23456B11, 0xD83BFE1A,
        0xC75BD30D, 0x4402FFA8, 0xD45BD529, 0x87D5085C, 0xC25ED047, 0xE76E3096, 0xACCF4F33, 0x3FCD8E04,
    ],
    // seed 0x9D
    [
        0x3F2B4005, 0x2CA526CC, 0x31C07936, 0x4176EC24, 0x94955EFC, 0x3B319B89, 0xD2847981, 0xECC23FCC,
        0x65087CA3, 0xE4BB602E, 0xC7395127, 0xFA1AFF8B, 0x46640CE9, 0xAE9E6359, 0xB9F6DCBB, 0x2441CF05,
    ],
    // seed 0x9E
    [
        0x114ECA61, 0xCEB72D24, 0xF5CEE97C, 0x1A6C6DE5, 0xC978921B, 0x8183C7DF, 0x75FFA81A, 0x54C78454,
        0xE341777B, 0xA377EB8F, 0x2FB46D28, 0x7484A304, 0xFCC6E451, 0x00AD6115, 0x8C7A8539, 0xB8FB9C8D,
    ],
    // seed 0x9F
    [
        0x631569CE, 0x3CEA85E6, 0x67CA94FB, 0xA1B9BA82, 0x2ECCA158, 0x7183107E, 0xD8CAD567, 0x72C49EF9,
        0x70E7EBFD, 0x8207608F, 0x3724A005, 0x758CA924, 0x50636DC4, 0xACCB0556, 0x6D405AC4, 0x8A5314F3,
    ],
    // seed 0xA0
    [
        0xD18A5C1F, 0x4CAA4E46, 0xF941D8FB, 0x8910E00C, 0x04135F6C, 0xD30FC929, 0xC3B360D0, 0xE2A94AD4,
        0x8EB7963B, 0xB45A208A, 0x810CC162, 0x480709B1, 0xD1C4C66B, 0x260A848C, 0x03852EB1, 0x03E80FAF,
    ],
    // seed 0xA1
    [
        0x7191189A, 0xDF88B106, 0x270C92EB, 0x365D95DE, 0xCBBA1C2A, 0xE52B8957, 0xF044B33E, 0x5E2DCF40,
        0xB0C16ADB, 0x3BC95A8F, 0xBD9F4EA9, 0x5263FD9C, 0xE968C04E, 0x342FF283, 0x51AA3E9E, 0x124A159E,
    ],
    // seed 0xA2
    [
        0x24B32DCC, 0x44F37077, 0x9AAFFCC3, 0x32E3077B, 0xA67D2A44, 0xD8E33C58, 0x31D8FFED, 0x527CF411,
        0x1C6481C2, 0xA82EE00D, 0xA009B980, 0x0EF2F1E2, 0xA34E1C41, 0xAC59AF91, 0xD2F7BDD8, 0x7F2DD13A,
    ],
    // seed 0xA3
    [
        0xA5A224CC, 0xDABF1DA8, 0x965FA109, 0x1EF7AE20, 0xE75191AC, 0x556242D1, 0xF93E3B65, 0x24204306,
        0xDF436255, 0xF515309E, 0xD6C99F66, 0xB8B33C5A, 0x26409A44, 0x89A2FAEC, 0xF347B12A, 0xEE8574F5,
    ],
    // seed 0xA4
    [
        0x3EA28C5C, 0x895E3A3B, 0xC80F9CF0, 0xD3B36F0C, 0xE0B89D61, 0x4BA2A1EC, 0x5B473608, 0x7394CBCC,
        0x3E4B8B95, 0x8A7C4C3F, 0x1E5A5C8A, 0xDC5ED8D6, 0x4BAC0ABC, 0x9F899E15, 0x8622B1B2, 0x4274A36A,
    ],
    // seed 0xA5
    [
        0x7E5F5822, 0xDEA604B7, 0x7B01342A, 0x6E87C708, 0x45661FB9, 0x71790AEB, 0xB28495DD, 0x39097470,
        0x7F231B78, 0xA8A220E4, 0xD17A9A1A, 0xEAF2A9B0, 0xC2688D34, 0x16382D40, 0x63E46812, 0x70D25EF7,
    ],
    // seed 0xA6
    [
        0x3A7BB129, 0x77815764, 0x6982BDF6, 0x7B02B526, 0xBE057F84, 0x82D9DCF8, 0x21F9B7A4, 0xDA4963D0,
        0x5B23D049, 0x3AAB15EF, 0xD3584ABA, 0x9B53C472, 0x5AB0298B, 0xB780B318, 0x28D5E235, 0xFF5C3CFD,
    ],
    // seed 0xA7
    [
        0x9693EE85, 0xF8459DA5, 0xC4D84DE4, 0x1F189599, 0x92AB0C97, 0xA21E8458, 0xBC207FE6, 0x215FEF19,
        0x22B13021, 0x80E5C9EB, 0x53D409A6, 0x0462A3E3, 0x12FB3C12, 0xC1644218, 0x2C3015FC, 0x06667AA3,
    ],
    // seed 0xA8
    [
        0xE95C647C, 0x4E4AA30A, 0xFC6D94E2, 0xCCF44408, 0xC72C5D89, 0x018B04E8, 0x104CA9F7, 0x54CF3BF5,
        0xDC473147, 0x733B0B74, 0xB7576AFD, 0x74495AF5, 0xCD53201B, 0x1F909558, 0x42F659AA, 0x3F933A2C,
    ],
    // seed 0xA9
    [
        0xDCB79075, 0xC38F70DE, 0x6850554F, 0xB3932DC7, 0x672452B6, 0x956D3AFF, 0x3AADA173, 0x9B0C211A,
        0xE2A1EADA, 0xF2319F6F, 0x9757C761, 0x0D44045B, 0xAE697542, 0xA492FD43, 0x54DF5863, 0xF6830CD7,
    ],
    // seed 0xAA
    [
        0x1DE39AB5, 0x17682881, 0xCD55D6C5, 0xAC2FE20D, 0x611416E0, 0x44A471AF, 0x67D81817, 0xEA5371E1,
        0x42033BE7, 0x02A11AA5, 0x6B7F3AC5, 0xCC6EE0A2, 0x73102E01, 0x55F93079, 0x196EB90D, 0x37D134A8,
    ],
    // seed 0xAB
    [
        0x37C34362, 0x38232225, 0x9E434C78, 0x9FBED056, 0x3E0D4F33, 0xF86DEC81, 0x14E47219, 0x14F400C7,
        0x69CD572C, 0x6F8627EA, 0x66B9F7DE, 0x331291DE, 0xA7C4B5C4, 0x9A16D3E4, 0x6AC0B846, 0xE1C79E06,
    ],
    // seed 0xAC
    [
        0x05C9A9DB, 0xB2DD3A2B, 0x8DBE1A81, 0xD4EB2614, 0x60B541F9, 0x9921A21D, 0xFBCB5A66, 0x2FFB61C2,
        0x7D033B9A, 0xFFB6549A, 0x0DFE89A7, 0xD16AB919, 0x88C50386, 0x6D055220, 0x993BCDD1, 0x6074D016,
    ],
    // seed 0xAD
    [
        0x4450D8CB, 0x9D5E1E9F, 0x69C3A01F, 0x4B4DDA6A, 0x021E25A0, 0xFD61D736, 0x3DF3A118, 0x775019B2,
        0x1B7A0E2B, 0x5A1E819D, 0x014538A9, 0x5C684E76, 0xCF8336D6, 0x819B5C9F, 0x9A6FEF19, 0x9007D620,
    ],
    // seed 0xAE
    [
        0x77A39650, 0x192E615B, 0x88687940, 0xE8AD79AF, 0x38A284BB, 0xD0079E21, 0x8328ADED, 0x8839AAF4,
        0x296E6FC9, 0x6D5106FD, 0x826D5D04, 0xB8EF1230, 0x144916DF, 0x452DFFF5, 0xCCCF69C3, 0x45CD8D67,
    ],
    // seed 0xAF
    [
        0x4A500183, 0x8C7DB46D, 0x92883501, 0xC42C6792, 0x9E5D7CDD, 0x3DA6909B, 0x628C8A55, 0x604249B7,
        0x7AB616FD, 0xAB0D7ED4, 0xC470BF7F, 0xC72B6224, 0x42B1188C, 0x30063A1F, 0x18906278, 0x54C8963D,
    ],
    // seed 0xB0
    [
        0x996E7983, 0xC14EB138, 0xD73341FD, 0x809972AB, 0x79369A36, 0xF4EFEC0B, 0x35E5129A, 0x4E3A39DE,
        0xBF442ADB, 0x0550FE14, 0xE789DF0C, 0xDF8D60ED, 0xB9149ADC, 0x0CFCDB7B, 0x7DD29AB5, 0x88414B96,
    ],
    // seed 0xB1
    [
        0xB4C7EC99, 0xE2008B6D, 0x1C51371E, 0x65D73FCE, 0x82544785, 0xA39B4455, 0x1F54AAFE, 0x8D6C89AD,
        0x57D680BF, 0x7589DD4A, 0xCD838736, 0xF5D2D70C, 0x51D667EE, 0xACFA6726, 0xBB8058C5, 0xB8FD8BF0,
    ],
    // seed 0xB2
    [
        0x90428D47, 0x48358D4E, 0xDE31D957, 0x7770BC37, 0xE1AB72B5, 0x2032C55F, 0x807A40EC, 0x49FD2CF6,
        0xEDA12254, 0xF8DACB49, 0xB0E19433, 0xD67D854F, 0x39FAA08F, 0xDF547560, 0xB6BCEDF9, 0x6CA0B125,
    ],
    // seed 0xB3
    [
        0xF3103AA7, 0xD9769EF9, 0x25219591, 0x1038ACD0, 0x89563564, 0x01F3ED30, 0x781114FE, 0xC04CACF9,
        0x8AD1CA5A, 0x61129CE4, 0x1B24C188, 0xCADF99FE, 0x2583A09F, 0x68776D44, 0x533839E6, 0xFD48AB21,
    ],
    // seed 0xB4
    [
        0x065A58A4, 0x35A394B6, 0x7835FC04, 0x3920A1E8, 0xB9AA13DC, 0xAC88766D, 0xBF38EDE1, 0x314E81E7,
        0x15D667A5, 0xB847FE34, 0x07D90D1D, 0xD221FDE4, 0xC88914D5, 0x63C77F35, 0x94B44C98, 0x302B3769,
    ],
    // seed 0xB5
    [
        0x77E5F5C3, 0x53A2B0B9, 0x9449E5F8, 0x6B6F304F, 0x11F2E756, 0x86D1C1A1, 0xFFA4E429, 0x81ABCE90,
        0xD7C38044, 0x9C3A064B, 0x01D0F11C, 0x32B310AC, 0x35FFC753, 0x69E48AD4, 0xACC54B86, 0x8F6CB83D,
    ],
    // seed 0xB6
    [
        0x27284FA8, 0xBF236ABB, 0xD3B945EC, 0x2C7F84FD, 0xCC6167AD, 0xA2550FC3, 0x0C0E24D1, 0x0636E7BE,
        0x26FD1BAC, 0xDA8CC245, 0xB25D4B7A, 0x79768646, 0xCEF9541A, 0x6F83BECA, 0xB712A110, 0x77002C84,
    ],
    // seed 0xB7
    [
        0x884EA942, 0x8F70D59E, 0x889121C8, 0xD2CADF52, 0x1FB376C6, 0x0EA8A4CF, 0xA1A95E3B, 0xE680F2E5,
        0x6E1732A0, 0xA73FB855, 0xB2E7D79A, 0xEED582C7, 0xBEA8D4E4, 0xA9A0D733, 0xB7D59055, 0x59B4A6D1,
    ],
    // seed 0xB8
    [
        0x1F6A5523, 0xFC20D1BE, 0x9F91E088, 0x3E429B14, 0x6120D360, 0xC3B19F09, 0x629F5E14, 0xA2D8EC0A,
        0x9965D5AD, 0x37DFF05C, 0xA625242C, 0x4C932783, 0xB6DA2A89, 0x110836B3, 0xC7DF78EF, 0xE9CD9DD2,
    ],
    // seed 0xB9
    [
        0x82FAE53D, 0x986FE20E, 0x24EEA70F, 0x84640ED9, 0xA2061489, 0x48DFC42D, 0x59C29391, 0x68121E83,
        0x823949D9, 0xB645B80D, 0xA644F448, 0xFDAD6A3D, 0xC69E0A57, 0x1E4C7262, 0xE80DEB42, 0x027C4A60,
    ],
    // seed 0xBA
    [
        0x473BB956, 0xCB2F02CC, 0x5F427A70, 0x3AF47BF3, 0x8AE436ED, 0xD80B574D, 0x3B0567A7, 0x9477A9DE,
        0x75559183, 0x0C7F6A9A, 0x00C8D367, 0x4557642F, 0xB89636CC, 0x3E75D5C8, 0xD0061BAF, 0x193528D5,
    ],
    // seed 0xBB
    [
        0xD47118FC, 0x011036B5, 0xD080C9EC, 0x47EC6975, 0x3F75CF12, 0x5A055D37, 0x5FAFAA62, 0x458E063B,
        0xE470E1BE, 0xCC5680FC, 0xC1796E69, 0x241E2F59, 0x8339CA05, 0xA73CEB97, 0x0E9447DA, 0x34CB0BF9,
    ],
    // seed 0xBC
    [
        0xCE40299E, 0xFDB04FEB, 0x21DFD5D4, 0xAEFB0E11, 0xC5DD675E, 0xAAAC5824, 0x7166D58D, 0x19CE9F47,
        0x1569210A, 0x5C1AE3DB, 0x0DEEDD30, 0x8F106C9B, 0x0BB8583F, 0x69C9BEA0, 0x4E62464D, 0x057171E3,
    ],
    // seed 0xBD
    [
        0x89190C7D, 0x75DAD5EC, 0x7B95AF45, 0xA3ED02BB, 0xC777200D, 0x302DC6D5, 0x8640945C, 0xB2B72121,
        0xF741BA57, 0x313D78E0, 0x534DDD5C, 0xEFFD2CC9, 0x01B37C90, 0xC5847A75, 0xD1D73DE5, 0x550B6D4E,
    ],
    // seed 0xBE
    [
        0xB9FF9756, 0xCCF0D222, 0x15732E6F, 0xA0BED290, 0x86A3512C, 0x07474904, 0x630D135B, 0x0EC61527,
        0xF804E7B5, 0x73F456DF, 0x8CE59E9E, 0xF966727F, 0x99D1F7C5, 0x771D868C, 0xF7E3B0EA, 0xC4E93A79,
    ],
    // seed 0xBF
    [
        0x134B4EE3, 0x617D32EA, 0x8D26DAB9, 0xDB3167F1, 0xCCA9B483, 0x055A2021, 0x82C657A4, 0x075DABA6,
        0x5DB5C8FE, 0x8E6D1DD7, 0x13995839, 0xF3921C0E, 0x09B6BA59, 0x1BC6698C, 0xA815119A, 0x4F30E90A,
    ],
    // seed 0xC0
    [
        0xDE8A8387, 0xCCFBF084, 0xD70CB5A4, 0x57EAC6DB, 0x8C7F4870, 0xF9A42DC6, 0x821EE329, 0xD2A93503,
        0xC23AE795, 0x82465DAC, 0x1BB50AF7, 0x44A4B7F3, 0x7A772AEC, 0x6ED28DC5, 0x8DEC176E, 0x1DC0286F,
    ],
    // seed 0xC1
    [
        0x7FA06454, 0x538A87E4, 0x4A8C7811, 0xDE2C2FB3, 0xBD3CA315, 0xEB167FCD, 0xCCF2016E, 0x33E80FE6,
        0x4ADBD005, 0xFCA7903D, 0x5CC202B7, 0x63453FD3, 0xFAC5007E, 0xCAAEC89C, 0xA0A2FBE5, 0x219F91FD,
    ],
    // seed 0xC2
    [
        0x22C202C9, 0x97ED3CCF, 0xF3745C9E, 0x15E8713C, 0x164ECAE8, 0x839A5512, 0xB1A4393A, 0xF6ECF6AB,
        0xAF3A25B3, 0x103CCDE7, 0x2A79F888, 0x46672D2F, 0x6A72A9A6, 0x519261C2, 0x3EFAA2C9, 0xC00C22FE,
    ],
    // seed 0xC3
    [
        0x989941FE, 0x67B7CC5C, 0x1A2108A8, 0x0763328B, 0x0F2FAB91, 0x9FE37C15, 0xF22CA68C, 0xF36C3A81,
        0x5C4696E0, 0xD4D8C33F, 0xB4B2A607, 0x2891374A, 0xD9703CE3, 0x2E92EE79, 0xDD9D8570, 0x9162E013,
    ],
    // seed 0xC4
    [
        0x18373CA7, 0x25F9F51B, 0xA97C7CC0, 0x36485337, 0x450AC4F9, 0x00925B7F, 0x420178BC, 0x997A8645,
        0x84677258, 0xBD12FA24, 0xE9854089, 0xB5EF2C86, 0xB855057B, 0xA9CF903A, 0xD46F4315, 0x4CA68090,
    ],
    // seed 0xC5
    [
        0x5327DE01, 0x200C29D9, 0x9A7FA3D0, 0xEA69802E, 0xA6544859, 0x3F4DCEA6, 0xCF6B5A2E, 0x7FB882F7,
        0x0F06F9D4, 0xC602BD0D, 0x42F45779, 0x86990029, 0x659AC2C2, 0xC129F374, 0x4D407A7B, 0xC97D6235,
    ],
    // seed 0xC6
    [
        0x49CD5165, 0x497217F7, 0x4F89E86D, 0xD30538DB, 0xEC1DC11C, 0xA91EBDAD, 0xAD441AC7, 0xF8715EF3,
        0xF625B933, 0x0B01EC16, 0x136D8711, 0xC0865448, 0x42A6576D, 0x887BB753, 0x7771E928, 0x09163CB9,
    ],
    // seed 0xC7
    [
        0xB877C88C, 0xC4610528, 0x181A0A1C, 0x1444451A, 0x72F249AF, 0x05A8EA28, 0x5C433181, 0x0F4E7DB1,
        0x0BB5986A, 0xAF4EE9C5, 0x62A89771, 0xD5F2DCAA, 0xAC445E2A, 0x13FB15B7, 0xB74A3AFC, 0x0ECE682B,
    ],
    // seed 0xC8
    [
        0x27F9BBB9, 0xAE761596, 0x4269BF46, 0xBC3B1CA8, 0xBEFFB989, 0x7D0C1429, 0x91DFBF6C, 0xE5B06078,
        0x7ABDAE15, 0x02814E85, 0x56FE1F43, 0xC70E7D54, 0xB83AE6DF, 0x24873E7B, 0x0FA23D23, 0x5E57510A,
    ],
    // seed 0xC9
    [
        0xFB07C5D1, 0xB4E2DBB4, 0xD555735D, 0x73F366F6, 0xED4BBC77, 0xCD2C0A9F, 0x7B900E06, 0x7F84D56C,
        0xE3F8143D, 0x1A6C3F8B, 0x7DD6CFFF, 0x4D9748C7, 0xF31EAAE1, 0x73A752D7, 0x78E9C432, 0x71A7F7D3,
    ],
    // seed 0xCA
    [
        0x42948DC1, 0x05EF36C5, 0x42F5B471, 0xA80604A2, 0x0B16CCCD, 0xBBEB824C, 0x47C58FCE, 0x9B2D3C1E,
        0xF28D8F97, 0x6C0493B8, 0x2B071F5E, 0x7765157A, 0x7CAF2A35, 0xF93020C5, 0xE2D22DE5, 0xDEC25457,
    ],
    // seed 0xCB
    [
        0xF83A1147, 0x710467A4, 0x1044E92A, 0xB3772F6D, 0xF7510683, 0x8B6B3D9A, 0x684167BF, 0x94D60894,
        0x72889C97, 0x1BB2C962, 0xC03485C8, 0x5FFA57B7, 0xD0470985, 0xF9CA1D3B, 0x1E7E79AE, 0xE11878D8,
    ],
    // seed 0xCC
    [
        0x887A52CA, 0xFD5B6828, 0x3059F364, 0x2FBFE44E, 0xC4CCBB6D, 0xB1211A42, 0xA724FFDD, 0x2797D733,
        0x694667C6, 0x17710F47, 0x9F6843F0, 0x18664613, 0x8F2EBD83, 0x5C53A8F6, 0xFD959182, 0x028BF870,
    ],
    // seed 0xCD
    [
        0x168DDD86, 0xFDE4D3A8, 0x0FF08FDB, 0x19350D00, 0xA2D4A207, 0x1FA2A21A, 0x81DCC66C, 0x44E4CC99,
        0x31DC67BC, 0xB130AF77, 0x3A2F8C6E, 0x6ECF2360, 0x368CA87F, 0x56E9EEE5, 0xFD432A29, 0x14BC31CB,
    ],
    // seed 0xCE
    [
        0x4B75B234, 0xCD283867, 0x929C5A58, 0xAF9F55B5, 0x78308C74, 0x1C0A561B, 0x729AE777, 0xCAA60828,
        0xCD586F11, 0xA9AE0C65, 0x8FD07F25, 0x3288D7C4, 0x6C360B8F, 0x87633719, 0x5895120F, 0x710E99FA,
    ],
    // seed 0xCF
    [
        0x212BA3CA, 0x14383627, 0x0B8FB2F7, 0x6389C29F, 0xFDD370CD, 0xAB9E7F50, 0x8624D368, 0x775BBA43,
        0x8BC37711, 0x483A1737, 0xCB43AC55, 0xB01C56E8, 0x06533C39, 0x768589A1, 0xD3A2875C, 0xB663569B,
    ],
    // seed 0xD0
    [
        0x25058F87, 0x63ACAA27, 0xD234622F, 0x21BA2B63, 0x4CD8E1D7, 0xCAEE0979, 0x304E7A5A, 0x233B75C0,
        0xCD8F8A7C, 0x011D6A8E, 0x852A4FB2, 0x22FABE7C, 0x77008088, 0xDA0FACF9, 0x4E52DA17, 0xD2291450,
    ],
    // seed 0xD1
    [
        0xC80E853D, 0xC1B9F2EE, 0x03854A2E, 0xCA231897, 0x1413733A, 0xDC90E549, 0x8B6C3EED, 0x4FA57811,
        0xF591AF0E, 0xEB60BA1B, 0xD020F387, 0x32504EC4, 0xD6BD1618, 0xDA8CF5FD, 0xE142A62F, 0xA115F3DC,
    ],
    // seed 0xD2
    [
        0x098ADBD4, 0xD75B707C, 0x911C5767, 0xEA2B9B77, 0x7CA672AE, 0x02FE577B, 0xDD21B734, 0x34A21577,
        0x3CAA6A9A, 0xB4EEF797, 0xB4382502, 0xE196B5C7, 0x36397EF7, 0x9AF9A94D, 0xC42502A2, 0x9C2DBE51,
    ],
    // seed 0xD3
    [
        0x277C00AB, 0x73066A61, 0xE9DE8612, 0x3069B9BB, 0xDE55CA08, 0xB4411116, 0x28509247, 0x7FAC14ED,
        0xF3A764A1, 0xEF07024C, 0xF273E488, 0x1706FB18, 0x75EC1E03, 0x23608118, 0x935D5E19, 0x6F5647F2,
    ],
    // seed 0xD4
    [
        0x663051F1, 0x36145BE1, 0x6D9F0B32, 0x951C0064, 0x630299B9, 0xCE1AB8A8, 0xC72CFA81, 0xB4626592,
        0x24BAA262, 0x06F12920, 0x5530C10B, 0x41AB2AF3, 0xFB673F07, 0xA751557A, 0x835DE7B9, 0xB63E4A77,
    ],
    // seed 0xD5
    [
        0x319BD82E, 0x60C63998, 0xE3853F47, 0xA3127852, 0x569C57CC, 0x0A3CF2FB, 0xA9A25668, 0x64E5A278,
        0xE302E1FB, 0x7B2A930B, 0x6F7AC97E, 0x53C0D90B, 0x9052C9E7, 0x9F536CB9, 0x9CA6980B, 0xEB893018,
    ],
    // seed 0xD6
    [
        0x8DC82115, 0x984B295F, 0xA9678BBB, 0x1CDD6970, 0x80CC51C2, 0x5033F6AF, 0x6E15BC95, 0xB3798530,
        0x290C894E, 0xE66D18A8, 0xEBC375B4, 0xBCC0593D, 0x58D779A0, 0x65AA674A, 0x11F86694, 0x57EAEB11,
    ],
    // seed 0xD7
    [
        0x1AC2BE2C, 0xB9A0B146, 0xBCD90937, 0x32ED9FF4, 0x43EB2AFB, 0x74B84E2C, 0xE498D255, 0x3B86B78D,
        0xBBC6864A, 0x46E97A11, 0x2BD02057, 0x81D9FA15, 0xCD37FBE7, 0xE11B5758, 0x26487DD2, 0x0D19B042,
    ],
    // seed 0xD8
    [
        0x29D184FA, 0xFF183AF5, 0x8A629318, 0x13A9305D, 0xD185B0FC, 0x6BC0DD92, 0x1876177C, 0x94885EAE,
        0x6B20DD2E, 0x97DD831B, 0x7F8684B6, 0x4F068696, 0x5BF1EFD7, 0xBB98F09C, 0xA393A542, 0xCB1F45FB,
    ],
    // seed 0xD9
    [
        0xAED31916, 0x813A1D38, 0x669EDE7F, 0x629BF98B, 0xAC2771A5, 0x4A315DA3, 0x6C92135D, 0x951ADFD9,
        0xA7CE895E, 0x0E4AF5B4, 0x6A931A49, 0xCB303466, 0x7127878F, 0x9969DDF6, 0xAF32A959, 0x27B2EF83,
    ],
    // seed 0xDA
    [
        0x22C718DB, 0xA153ABAD, 0x7CF4AB76, 0xA98CD121, 0x7FCF5924, 0x48B2DEC9, 0x1DA95B36, 0x8947D3D1,
        0xF09B7F9C, 0xA36FDF2B, 0xA328318B, 0xA39F8E00, 0x37AE71CD, 0xCE123636, 0xC3B9299B, 0x5171154E,
    ],
    // seed 0xDB
    [
        0x3137FD76, 0xB1D38C53, 0x965C7FDA, 0x6DDAD80A, 0xB97C5FB1, 0x4F7F8DD6, 0x7108D3B0, 0x4091AB72,
        0x52CB8C92, 0xAF38DD91, 0x31525E1E, 0x9D270A4E, 0x37D3682E, 0xAEF683C2, 0x534B5A4B, 0x707234E4,
    ],
    // seed 0xDC
    [
        0xA9AB0920, 0x21436245, 0x57B12BFE, 0x19B242A2, 0xC471D550, 0x5E51C994, 0xD69CE4CB, 0x300979B3,
        0x00019FBB, 0x8160A073, 0x9A59422D, 0xB94E4D70, 0x2BAAD7F0, 0x894D3249, 0xC3D6CFC9, 0x3BB532B0,
    ],
    // seed 0xDD
    [
        0x2EBF5FB1, 0xCAADA050, 0x44E0B097, 0x4F1EE975, 0xDCC41F6A, 0xA4FCA793, 0xEC0ED683, 0xA639B452,
        0x7E56BC91, 0xA13A5D00, 0x94A08330, 0x8681D232, 0x59DFB556, 0x3BC91392, 0xA7FAE726, 0xB3CBAC59,
    ],
    // seed 0xDE
    [
        0xF3495E47, 0x99264F1F, 0x53FA9442, 0x8A6E94AC, 0xAACD5B1B, 0x1C0371C4, 0x062215B3, 0x293A5C2B,
        0x1EC08CDF, 0x7041D998, 0xA7E18452, 0x7B54A716, 0x1F74A51E, 0x8268FC4D, 0xEB57C563, 0x31DEA391,
    ],
    // seed 0xDF
    [
        0x3AE1BF05, 0xB6E822C3, 0xCD8DFD1E, 0x702DB61C, 0x192829C0, 0xEFBB6A89, 0x09A8F87A, 0xCB8EA7BC,
        0x18202D7A, 0xE4E7B37D, 0x0D1062B6, 0x52230FE8, 0xC601FDC2, 0x3B208D70, 0xB5E09C4A, 0x1E7B101E,
    ],
    // seed 0xE0
    [
        0x4FBA1A55, 0x3EB898E6, 0x611D858E, 0xCBEF3903, 0xB457EBDB, 0x30FC3502, 0xFFA24388, 0x99577C14,
        0x291A50F0, 0xE89542CC, 0x872F982D, 0x3A613931, 0xD4E178F7, 0xDFB172AA, 0xD52039CE, 0x3C04A9D0,
    ],
    // seed 0xE1
    [
        0x9E281675, 0xD8DB46E5, 0x39B96DFF, 0xB415625C, 0xD301DBBE, 0x032F2A83, 0x6CC4ADDC, 0xE957F737,
        0x782FDDF4, 0x37AD9996, 0x676661D9, 0x074747E5, 0xAA12732F, 0x3E085D9B, 0x00E2BFA1, 0xF6A0B4B2,
    ],
    // seed 0xE2
    [
        0x4F0AD62A, 0x1CA03C98, 0xE1D0EB7F, 0xE58F7F2B, 0x0BCF8909, 0x94EB14B4, 0xF916D6DB, 0xA627B5CF,
        0xABD49A6A, 0x2E89B390, 0x18E27008, 0xB59A2655, 0xC8919655, 0x3870BD42, 0x504C963C, 0xEF173BE6,
    ],
    // seed 0xE3
    [
        0x3429DB91, 0x0F1C84E0, 0x9B776521, 0x1498BE4F, 0xF31B961E, 0x2732AE51, 0x7ACAEF53, 0x6CBB600E,
        0xE4A51786, 0xDD039B10, 0xB94EEBA6, 0x8BD25D36, 0x9B89D149, 0xBB67873D, 0x657F7A8B, 0x689A6400,
    ],
    // seed 0xE4
    [
        0xE320D05B, 0xAE798E15, 0x801FC190, 0x30300218, 0x0B03EAC5, 0x23E81F21, 0x8105F8E7, 0x05BE61D3,
        0x7170C2FF, 0x33653770, 0x31BA3EE9, 0x4D058732, 0xA015EAB3, 0x944BD774, 0xF4B9F23B, 0xFAB8F764,
    ],
    // seed 0xE5
    [
        0xC6FAA0CF, 0xE9DB23CB, 0x28F8C9A9, 0x5E7C3048, 0x5EEAAFAF, 0x4B98C389, 0xFAD0C4C8, 0x64B51746,
        0x1B0E0524, 0x5840F4C2, 0x84AD20F0, 0x6C69263B, 0x12A2EFF9, 0xBE63C38C, 0x9685D16F, 0x098F8423,
    ],
    // seed 0xE6
    [
        0x063B82A2, 0xAD93E406, 0xC78C37E8, 0x2F1B006B, 0x6CF58B2A, 0x6B022FEC, 0x02B8760E, 0xF6ECDB78,
        0xD8DC1830, 0xF9067061, 0x00B180A3, 0xDC60CCB6, 0xBBFCF229, 0xE924200A, 0x35C734EB, 0xC8F65362,
    ],
    // seed 0xE7
    [
        0x68E8696C, 0x4CB5641F, 0x5D229C4E, 0xE43BFC72, 0x155678B7, 0x5AE6BA31, 0x810FDE59, 0x1CE5B8D4,
        0x581BB9D9, 0xF0D82C82, 0xE378BBE2, 0x795DBB7A, 0xAAC794F1, 0x15ABE585, 0x5A1D115F, 0x171573EE,
    ],
    // seed 0xE8
    [
        0xBCBCDF4F, 0x0E81C90B, 0x80AE4ED4, 0xFA9B6206, 0x4C2C324B, 0x8773CAEE, 0xB8A2DADE, 0xCD3BBE72,
        0x5B3AEFF4, 0x7AF8FE77, 0x2D1FFB38, 0xA389F039, 0xC10CC67D, 0x874A986B, 0xA6186047, 0x28A7927A,
    ],
    // seed 0xE9
    [
        0x7A6BBC2C, 0x205312DD, 0x7E7DE0CF, 0x8FDF992C, 0x16ED4DF2, 0x430C7F67, 0x6435A2B2, 0x2ED7536E,
        0xDE235D6F, 0x622BF55E, 0x6F6ABD22, 0x3BC3B2D4, 0x7BFBA62B, 0xE6F6EE9C, 0x3E82E0FB, 0x0F85CC5A,
    ],
    // seed 0xEA
    [
        0x4F8EA30F, 0xC1B1AF02, 0x6752E735, 0x57B9FA0C, 0xAC88A477, 0x808B66B2, 0x83EC01B9, 0xC5E9E72B,
        0x13748602, 0x6CBC19A4, 0xBB7C60C5, 0x42D73E26, 0x8DEEED57, 0x051D8E64, 0x5CBF99ED, 0xCC368058,
    ],
    // seed 0xEB
    [
        0x9A34423D, 0x91E4F6D9, 0xB61F7DDA, 0xC4802349, 0x508EFE5E, 0x450F252C, 0xD7AB8D52, 0x00ECE2E0,
        0x4DFF416B, 0x6F20A534, 0xB21B8336, 0xC901899B, 0x3F700E4F, 0xF92744F7, 0xE6624041, 0x68C2667C,
    ],
    // seed 0xEC
    [
        0xF754490B, 0xA8A56D4F, 0x09D64EC7, 0x2906091A, 0xE61AFAFE, 0x9862B62B, 0x10DFFC2D, 0x1E14C6EE,
        0xEA40D6F7, 0xB0E015F7, 0x72AFC160, 0xAAC2468C, 0x3F776B20, 0x74B21583, 0x27C51D8C, 0x61DEFF0E,
    ],
    // seed 0xED
    [
        0xEC93F7DD, 0x68A82F9F, 0xB1069D3C, 0x167AF377, 0xD00296E1, 0x446CFDD8, 0x4A87F163, 0x26E0CEB8,
        0xF1DAC658, 0xAC2C5DC3, 0x7F2907A3, 0x465F2615, 0xA209D440, 0xE354E8A2, 0x60822FFB, 0x8FC7D56D,
    ],
    // seed 0xEE
    [
        0x9E21FA09, 0xA44E60B2, 0x12698B6B, 0xD72F04D2, 0x2F62107F, 0x7EFB8510, 0x95DEA96E, 0x41EE4075,
        0x5D16C724, 0x5F27FFCA, 0x5BB1FBEE, 0xB277EF3B, 0x1CD8E0E8, 0x6D62A718, 0x0034CDD7, 0x1649ECE4,
    ],
    // seed 0xEF
    [
        0x28FF5306, 0xB1652FA0, 0x9E46F428, 0x10C34A21, 0x60E97DF8, 0xE1AE78B9, 0x32D9BF60, 0xDDF0985E,
        0xA15DA3A0, 0xBC040503, 0x9EE080E4, 0x52209C3A, 0x7B45E47F, 0x3724AE32, 0x174D2893, 0xC94C1B6E,
    ],
    // seed 0xF0
    [
        0x06FA11A7, 0x3C86E129, 0x54996892, 0x5B8DBD3E, 0xE2617E2F, 0xFBBB1902, 0x322E75E5, 0x583F8431,
        0xE6F1551C, 0xCD99A3BE, 0x0568A349, 0x94AB36C4, 0x710B1D35, 0xEBEABAF2, 0x66504836, 0x08DBF6EE,
    ],
    // seed 0xF1
    [
        0xF143AA1A, 0xD7FE3C83, 0xEC51E782, 0x037D6FB0, 0x4924055C, 0xF2849AED, 0xCA942D26, 0xDC42A0F9,
        0x9025C6C3, 0x45446AA3, 0xEA0ACC02, 0x92197E1F, 0xD5879EB9, 0x847A9D33, 0x59E838E5, 0x849B33B6,
    ],
    // seed 0xF2
    [
        0xB693432A, 0xDD1829DA, 0x69DD9E3D, 0xF6830537, 0x23A59C32, 0x76083434, 0x2F25DDC8, 0x28348A8D,
        0x928FF40F, 0x62863B92, 0x64248257, 0x58541D46, 0xEA9CA9AC, 0x8E55AFD3, 0x4796FC62, 0x743D7900,
    ],
    // seed 0xF3
    [
        0xB45D93F5, 0xB2CCABD5, 0xECD2D3CE, 0x6BDC30EC, 0xF8840326, 0x1049E003, 0x44988D6A, 0xE8F6A1A2,
        0x85C5FDF9, 0x1D07BFB9, 0x79904FC9, 0x3CE6D9A9, 0xCEDEA817, 0x1F1DD23D, 0xC0A23FA6, 0xF51233C7,
    ],
    // seed 0xF4
    [
        0xC5359A69, 0xF1F5A3E0, 0x943CA2FC, 0xD96A4ABD, 0x6ED1CA1A, 0x0E9E1CE8, 0x0A9CAE55, 0x714DD169,
        0x11A0B453, 0x3278489E, 0x54BE6876, 0x0D110609, 0x0BDAB89D, 0xC45E6570, 0x071AFAB1, 0xF7E2BEEA,
    ],
    // seed 0xF5
    [
        0x83502F16, 0x9C07BC1E, 0x2027681C, 0x36F44964, 0x03B1199C, 0xF8307E4B, 0xEDC20F42, 0x5699FA2A,
        0x22173E38, 0x5D10109E, 0xF41548C9, 0x9E834200, 0x61FE7BC9, 0x216B22B8, 0x26BF8C25, 0x53F36117,
    ],
    // seed 0xF6
    [
        0x2C5F6A03, 0x2CF344A7, 0x54DCEA20, 0x822678D9, 0x4DA90B88, 0x9B866935, 0xD1671733, 0x99C68CB0,
        0x6DC2B228, 0x5ADDB243, 0xD78324BD, 0x44FE5704, 0xC4C7ED9B, 0x976E6A1F, 0x948D8BD3, 0x7564E646,
    ],
    // seed 0xF7
    [
        0x1900DECE, 0x1051DAA2, 0xAA6A5164, 0x1D14E06C, 0xB6673B2A, 0xB8357B5D, 0xE3F1FA65, 0x26462D25,
        0x84CCFE3F, 0x4DB913F5, 0xDC5AFD92, 0x8851E8EE, 0x4F6D552C, 0x278F8923, 0x572DDA7F, 0x82D9086F,
    ],
    // seed 0xF8
    [
        0x9B072EF1, 0x7381AF1E, 0xD4BF7EDF, 0xC84265CB, 0xCF4C6D5D, 0xA5B81C6C, 0x94FA869A, 0xD6BC4BAB,
        0xB8AC3EEC, 0x07E2848A, 0xEEEE36D7, 0x014CF599, 0x825932D6, 0x6DB1FC36, 0x0295750E, 0x743C140A,
    ],
    // seed 0xF9
    [
        0xA699C094, 0x07B4D886, 0x6919EEC1, 0x6BDCA87B, 0x73967BA3, 0xB64D48A8, 0x6BC2E6CA, 0xA8AB4D83,
        0x12A21EF2, 0xED3C50BD, 0x6CC369F9, 0x84C17DC0, 0x17BFDCE8, 0x0752E7C3, 0xE9894468, 0x76ED37C5,
    ],
    // seed 0xFA
    [
        0xB9CB3520, 0xC0A9D15B, 0x86ABC36A, 0xCDD7D20B, 0x9381F2F8, 0x0FD176BB, 0x89DB62CD, 0x4425D565,
        0x81D7D941, 0x68A6888E, 0xA827F0DF, 0x63AD84B4, 0x5E390A1C, 0x09DFC034, 0x3F155F2B, 0xD144B6F7,
    ],
    // seed 0xFB
    [
        0xA46A9C9B, 0x1D816C24, 0x48BE6A95, 0xD871C495, 0x05CD4182, 0x94A97431, 0x3A132237, 0x6F88F0F5,
        0x09F22A7F, 0x1CD8AE0B, 0x23E1B371, 0x86CB0694, 0xB9A7AD9E, 0x6A4CCBE3, 0xBE42D529, 0x4335729C,
    ],
    // seed 0xFC
    [
        0x0D9CDF94, 0xB46E1810, 0x1BE73FD7, 0x0929E4C8, 0x3CC2082C, 0xF1F3B1D8, 0xF8333A71, 0xD11B5CE4,
        0xBE779C61, 0xFF12C8F5, 0x01695173, 0x98380003, 0x8568A0C3, 0xD84346CF, 0xF2565366, 0xFE3FCD01,
    ],
    // seed 0xFD
    [
        0x10BBBBD2, 0xD23617FB, 0xB3E06853, 0x3B96CDBE, 0x8D9E9475, 0x3DA15774, 0xD34B54C7, 0x307AE095,
        0x106EE49D, 0xEDD53D2C, 0x7B604421, 0xC9EA130C, 0xBA1FF4ED, 0x2FBE4702, 0x871926B7, 0x370BC429,
    ],
    // seed 0xFE
    [
        0xEDF3029B, 0x222580E9, 0x23E9D903, 0x9A582898, 0x72EE6F26, 0x8839628F, 0x269D2274, 0xDF460A52,
        0x3DAB6F33, 0xE68E7C92, 0x2A067FCF, 0xDF608AF2, 0x641A9C6A, 0x879828AD, 0xC53FEC60, 0xA94F1ECE,
    ],
    // seed 0xFF
    [
        0xA3CC5862, 0xAAD52AE7, 0x1FD24060, 0x53ADF1A6, 0x1F8BF74A, 0x8E49C7F4, 0xC2727D58, 0x5D73B772,
        0x351223DA, 0x555A6ED1, 0x3A76216C, 0x4969A813, 0x637DA188, 0xA819D74D, 0x958B7FCC, 0xD9A83B14,
    ],
];
