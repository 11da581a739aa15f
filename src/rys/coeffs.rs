//! Static coefficient tables for the five-point Rys rule.
//!
//! Each polynomial band stores ten fits in the band-local variable
//! `x = T - shift`: five for the raw (unmapped) roots and five for the weight
//! factors. Coefficients are ordered highest degree first, ready for a Horner
//! fold. The two corrected asymptotic bands store only the damped correction
//! polynomials in T; the leading terms come from `crate::types`.
//!
//! The numbers are minimax fits and are reproduced digit for digit. Adjacent
//! bands agree at their shared edge only to the accuracy of the fits.

use crate::types::NROOTS;

/// Polynomial fits for one T band.
#[derive(Debug)]
pub struct BandFit {
    /// Centre subtracted from T before evaluation.
    pub shift: f64,
    /// Raw root polynomials, slot order.
    pub roots: [&'static [f64]; NROOTS],
    /// Weight-factor polynomials, slot order.
    pub weights: [&'static [f64]; NROOTS],
}

/// Damped correction polynomials for an asymptotic band.
#[derive(Debug)]
pub struct AsymFit {
    /// Root corrections for slots 1..=5.
    pub roots: [&'static [f64]; NROOTS],
    /// Weight corrections for slots 2..=5; slot 1 is the remainder.
    pub weights: [&'static [f64]; NROOTS - 1],
}

/// T <= 3e-7: first-order expansion about the T = 0 limit.
pub static NEAR_ZERO: BandFit = BandFit {
    shift: 0.0,
    roots: [
        &[-0.00215865967920897, 0.0226659266316985],
        &[-0.0220258754389745, 0.231271692140903],
        &[-0.0816520023025515, 0.857346024118836],
        &[-0.283193369647137, 2.97353038120346],
        &[-1.75382723579439, 18.4151859759051],
    ],
    weights: [
        &[-0.0196867576909777, 0.295524224714752],
        &[-0.0561737590184721, 0.269266719309995],
        &[-0.0971152726793658, 0.219086362515981],
        &[-0.102979262193565, 0.14945134915058],
        &[-0.0573782817488315, 0.0666713443086877],
    ],
};

/// 0 < T < 1, evaluated in T directly.
pub static BAND_0_1: BandFit = BandFit {
    shift: 0.0,
    roots: [
        &[
            -4.46679165328413e-11, 1.21879111988031e-9, -2.62975022612104e-8, 5.15106194905897e-7,
            -9.27933625824749e-6, 1.51794097682482e-4, -0.00215865967920301, 0.0226659266316985,
        ],
        &[
            1.93117331714174e-10, -4.57267589660699e-9, 2.48339908218932e-8, 1.50716729438474e-6,
            -6.07268757707381e-5, 0.00137506939145643, -0.0220258754419939, 0.231271692140905,
        ],
        &[
            4.84989776180094e-9, 1.31538893944284e-7, -2.766753852879e-6, -7.651163510626e-5,
            0.004033058545972, -0.0816520022916145, 0.857346024118779,
        ],
        &[
            -2.48581772214623e-7, -4.34482635782585e-6, -7.4601825798763e-7, 0.0101210776517279,
            -0.283193369640005, 2.97353038120345,
        ],
        &[
            -8.92432153868554e-9, 1.77288899268988e-8, 3.040754680666e-6, 1.058229325071e-4,
            0.04596379534985, -1.75382723579114, 18.4151859759049,
        ],
    ],
    weights: [
        &[
            -2.03822632771791e-9, 3.8911022913381e-8, -5.84914787904823e-7, 8.30316168666696e-6,
            -1.13218402310546e-4, 0.0014912888858679, -0.0196867576904816, 0.295524224714749,
        ],
        &[
            8.6284811839757e-9, -1.38975551148989e-7, 1.602894068228e-6, -1.646364300836e-5,
            1.538445806778e-4, -0.00128848868034502, 0.00938866933338584, -0.0561737590178812,
            0.269266719309991,
        ],
        &[
            -9.41953204205665e-9, 1.47452251067755e-7, -1.57456991199322e-6, 1.45098401798393e-5,
            -1.18858834181513e-4, 8.5369767598421e-4, -0.00522877807397165, 0.0260854524809786,
            -0.0971152726809059, 0.219086362515979,
        ],
        &[
            -3.84961617022042e-8, 5.6659539654447e-7, -5.52351805403748e-6, 4.53160377546073e-5,
            -3.22542784865557e-4, 0.00195682017370967, -0.00977232537679229, 0.0379455945268632,
            -0.102979262192227, 0.149451349150573,
        ],
        &[
            4.0959481252143e-9, -6.47097874264417e-8, 6.743541482689e-7, -5.917993920224e-6,
            4.531969237381e-5, -2.99102856679638e-4, 0.00165695765202643, -0.00740671222520653,
            0.0250889946832192, -0.0573782817487958, 0.0666713443086877,
        ],
    ],
};

/// 1 <= T < 5, centred at 3.
pub static BAND_1_5: BandFit = BandFit {
    shift: 3.0,
    roots: [
        &[
            -2.58163897135138e-14, 8.14127461488273e-13, -2.11414838976129e-11, 5.09822003260014e-10,
            -1.16002134438663e-8, 2.4681069441454e-7, -4.92556826124502e-6, 9.02580687971053e-5,
            -0.00145190025120726, 0.0173416786387475,
        ],
        &[
            1.04525287289788e-14, 5.44611782010773e-14, -4.831059411392e-12, 1.136643908832e-10,
            -1.104373076913e-9, -2.35346740649916e-8, 1.43772622028764e-6, -4.23405023015273e-5,
            9.12034574793379e-4, -0.0152479441718739, 0.176055265928744,
        ],
        &[
            -6.89693150857911e-14, 5.92064260918861e-13, 1.847170956043e-11, -3.390752744265e-10,
            -2.995532064116e-9, 1.57456141058535e-7, -3.95859409711346e-7, -9.58924580919747e-5,
            0.00323551502557785, -0.0597587007636479, 0.646432853383057,
        ],
        &[
            -3.61293809667763e-12, -2.70803518291085e-11, 8.83758848468769e-10, 1.59166632851267e-8,
            -1.32581997983422e-7, -7.60223407443995e-6, -7.41019244900952e-5, 0.00981432631743423,
            -0.223055570487771, 2.21460798080643,
        ],
        &[
            7.12332088345321e-13, 3.16578501501894e-12, -8.776668218053e-11, -2.342817613343e-9,
            -3.496962018025e-8, -3.03172870136802e-7, 1.50511293969805e-6, 1.37704919387696e-4,
            0.0470723869619745, -1.47486623003693, 13.5704792175847,
        ],
    ],
    weights: [
        &[
            1.04348658616398e-13, -1.94147461891055e-12, 3.485512360993e-11, -6.277497362235e-10,
            1.100758247388e-8, -1.88329804969573e-7, 3.12338120839468e-6, -5.04404167403568e-5,
            8.00338056610995e-4, -0.0130892406559521, 0.247383140241103,
        ],
        &[
            3.23496149760478e-14, -5.24314473469311e-13, 7.743219385056e-12, -1.146022750992e-10,
            1.615238462197e-9, -2.15479017572233e-8, 2.70933462557631e-7, -3.18750295288531e-6,
            3.47425221210099e-5, -3.45558237388223e-4, 0.00305779768191621, -0.0229118251223003,
            0.159834227924213,
        ],
        &[
            -3.42790561802876e-14, 5.26475736681542e-13, -7.184330797139e-12, 9.763932908544e-11,
            -1.244014559219e-9, 1.472744068942e-8, -1.611749975234e-7, 1.616487851917e-6,
            -1.46852359124154e-5, 1.18900349101069e-4, -8.37562373221756e-4, 0.00493752683045845,
            -0.0225514728915673, 0.0695211812453929,
        ],
        &[
            1.04072340345039e-14, -1.60808044529211e-13, 2.183534866798e-12, -2.939403008391e-11,
            3.679254029085e-10, -4.23775673047899e-9, 4.46559231067006e-8, -4.26488836563267e-7,
            3.64721335274973e-6, -2.74868382777722e-5, 1.78586118867488e-4, -9.68428981886534e-4,
            0.00416002324339929, -0.0128290192663141, 0.0222353727685016,
        ],
        &[
            -8.16770412525963e-16, 1.31376515047977e-14, -1.856950818865e-13, 2.596836515749e-12,
            -3.372639523006e-11, 4.025371849467e-10, -4.389453269417e-9, 4.332753856271e-8,
            -3.82673275931962e-7, 2.98006900751543e-6, -2.00718990300052e-5, 1.13876001386361e-4,
            -5.23627942443563e-4, 0.00183524565118203, -0.00437785737450783, 0.00536963805223095,
        ],
    ],
};

/// 5 <= T < 10, centred at 7.5.
pub static BAND_5_10: BandFit = BandFit {
    shift: 7.5,
    roots: [
        &[
            -1.13825201010775e-14, 1.89737681670375e-13, -4.81561201185876e-12, 1.56666512163407e-10,
            -3.73782213255083e-9, 9.15858355075147e-8, -2.13775073585629e-6, 4.56547356365536e-5,
            -8.6800390932374e-4, 0.0122703754069176,
        ],
        &[
            -3.67160504428358e-15, 1.27876280158297e-14, -1.296476623788e-12, 1.477175434354e-11,
            5.464102147892e-10, -2.42538340602723e-8, 8.20460740637617e-7, -2.20379304598661e-5,
            4.90295372978785e-4, -0.00914294111576119, 0.12259040340369,
        ],
        &[
            1.39017367502123e-14, -6.9639138542689e-13, 1.176946020731e-12, 1.725627235645e-10,
            -3.6863838563e-9, 2.87495324207095e-8, 1.71307311000282e-6, -7.94273603184629e-5,
            0.00200938064965897, -0.0363329491677178, 0.434393683888443,
        ],
        &[
            -1.27815158195209e-14, 1.99910415869821e-14, 3.753542914426e-12, -2.708018219579e-11,
            -1.190574776587e-9, 1.106696436509e-8, 3.954955671326e-7, -4.398596059588e-6,
            -2.01087998907735e-4, 0.00789092425542937, -0.142056749162695, 1.39964149420683,
        ],
        &[
            -1.19442341030461e-13, -2.34074833275956e-12, 6.861649627426e-12, 6.082671496226e-10,
            5.38116010542e-9, -6.2532971387e-8, -2.13596683505e-6, -2.373394341886e-5,
            2.88711171412814e-6, 0.0485221195290753, -1.04346091985269, 7.89901551676692,
        ],
    ],
    weights: [
        &[
            7.95526040108997e-15, -2.48593096128045e-13, 4.76124620872e-12, -9.535763686605e-11,
            2.225273630974e-9, -4.49796778054865e-8, 9.17812870287386e-7, -1.86764236490502e-5,
            3.76807779068053e-4, -0.00810456360143408, 0.201097936411496,
        ],
        &[
            1.25678686624734e-15, -2.34266248891173e-14, 3.973252415832e-13, -6.830539401049e-12,
            1.140771033372e-10, -1.82546185762009e-9, 2.77209637550134e-8, -4.01726946190383e-7,
            5.48227244014763e-6, -6.95676245982121e-5, 8.05193921815776e-4, -0.00815528438784469,
            0.0971769901268114,
        ],
        &[
            -8.20929494859896e-16, 1.37356038393016e-14, -2.02286306522e-13, 3.058055403795e-12,
            -4.387890955243e-11, 5.923946274445e-10, -7.503659964159e-9, 8.851599803902e-8,
            -9.65561998415038e-7, 9.60884622778092e-6, -8.56551787594404e-5, 6.66057194311179e-4,
            -0.00417753183902198, 0.0225443826852447,
        ],
        &[
            -1.0876461248879e-17, 1.85299909689937e-16, -2.730195628655e-15, 4.127368817265e-14,
            -5.881379088074e-13, 7.805245193391e-12, -9.632707991704e-11, 1.099047050624e-9,
            -1.15042731790748e-8, 1.09415155268932e-7, -9.33687124875935e-7, 7.02338477986218e-6,
            -4.53759748787756e-5, 2.41722511389146e-4, -9.75935943447037e-4, 0.00257520532789644,
        ],
        &[
            7.28996979748849e-19, -1.26518146195173e-17, 1.886145834486e-16, -2.876728287383e-15,
            4.114588668138e-14, -5.44436631413933e-13, 6.64976446790959e-12, -7.4456006997494e-11,
            7.57553198166848e-10, -6.92956101109829e-9, 5.62222859033624e-8, -3.97500114084351e-7,
            2.3903912613814e-6, -1.18023950002105e-5, 4.52254031046244e-5, -1.2111378215037e-4,
            1.75013126731224e-4,
        ],
    ],
};

/// 10 <= T < 15, centred at 12.5.
pub static BAND_10_15: BandFit = BandFit {
    shift: 12.5,
    roots: [
        &[
            -4.16387977337393e-17, 7.2087299737386e-16, 1.395993802064e-14, 3.660484641252e-14,
            -4.154857548139e-12, 2.301379846544e-11, -1.033307012866e-9, 3.997777641049e-8,
            -9.35118186333939e-7, 2.38589932752937e-5, -5.35185183652937e-4, 0.00885218988709735,
        ],
        &[
            -4.56279214732217e-16, 6.24941647247927e-15, 1.737896339191e-13, 8.964205979517e-14,
            -3.538906780633e-11, 9.561341254948e-11, -9.77283189131e-9, 4.24034019462e-7,
            -1.02384302866534e-5, 2.57987709704822e-4, -0.00554735977651677, 0.0868245143991948,
        ],
        &[
            -2.52879337929239e-15, 2.13925810087833e-14, 7.884307667104e-13, -9.02339815951e-13,
            -5.814101544957e-11, -1.333480437968e-9, -2.217064940373e-8, 1.643290788086e-6,
            -4.39602147345028e-5, 0.00108648982748911, -0.0213014521653498, 0.294150684465425,
        ],
        &[
            -6.42391438038888e-15, 5.37848223438815e-15, 8.960828117859e-13, 5.214153461337e-11,
            -1.106601744067e-10, -2.007890743962e-8, 1.543764346501e-7, 4.520749076914e-6,
            -1.88893338587047e-4, 0.00473264487389288, -0.0791197893350253, 0.860057928514554,
        ],
        &[
            -2.24366166957225e-14, 4.87224967526081e-14, 5.587369053655e-12, -3.045253104617e-12,
            -1.22398388308e-9, -2.05603889396319e-9, 2.58604071603561e-7, 1.34240904266268e-6,
            -5.72877569731162e-5, -9.56275105032191e-4, 0.0423367010370921, -0.576800927133412,
            3.87328263873381,
        ],
    ],
    weights: [
        &[
            8.98007931950169e-15, 7.25673623859497e-14, 5.851494250405e-14, -4.234204823846e-11,
            3.911507312679e-10, -9.65094802088511e-9, 3.42197444235714e-7, -7.51821178144509e-6,
            1.94218051498662e-4, -0.00538533819142287, 0.168122596736809,
        ],
        &[
            -1.05490525395105e-15, 1.96855386549388e-14, -5.500330153548e-13, 1.003849567976e-11,
            -1.720997242621e-10, 3.533277061402e-9, -6.389171736029e-8, 1.046236652393e-6,
            -1.73148206795827e-5, 2.57820531617185e-4, -0.0034618826533835, 0.0703302497508176,
        ],
        &[
            3.60020423754545e-16, -6.24245825017148e-15, 9.945311467434e-14, -1.749051512721e-12,
            2.768503957853e-11, -4.08688551136506e-10, 6.0418906330361e-9, -8.23540111024147e-8,
            1.01503783870262e-6, -1.20490761741576e-5, 1.26928442448148e-4, -0.00105539461930597,
            0.0115543698537013,
        ],
        &[
            2.51163533058925e-18, -4.31723745510697e-17, 6.557620865832e-16, -1.016528519495e-14,
            1.491302084832e-13, -2.06638666222265e-12, 2.67958697789258e-11, -3.23322654638336e-10,
            3.63722952167779e-9, -3.75484943783021e-8, 3.49164261987184e-7, -2.92658670674908e-6,
            2.12937256719543e-5, -1.19434130620929e-4, 6.45524336158384e-4,
        ],
        &[
            -1.29043630202811e-19, 2.16234952241296e-18, -3.107631557965e-17, 4.570804313173e-16,
            -6.301348858104e-15, 8.031304476153e-14, -9.446196472547e-13, 1.018245804339e-11,
            -9.96995451348129e-11, 8.77489010276305e-10, -6.84655877575364e-9, 4.64460857084983e-8,
            -2.66924538268397e-7, 1.24621276265907e-6, -4.30868944351523e-6, 9.94307982432868e-6,
        ],
    ],
};

/// 15 <= T < 20, centred at 17.5.
pub static BAND_15_20: BandFit = BandFit {
    shift: 17.5,
    roots: [
        &[
            1.9187576454574e-16, 7.8357401095707e-16, -3.260875931644e-14, -1.186752035569e-13,
            4.275180095653e-12, 3.357056136731e-11, -1.123776903884e-9, 1.231203269887e-8,
            -3.99851421361031e-7, 1.45418822817771e-5, -3.49912254976317e-4, 0.00667768703938812,
        ],
        &[
            2.02778478673555e-15, 1.01640716785099e-14, -3.385363492036e-13, -1.615655871159e-12,
            4.527419140333e-11, 3.853670706486e-10, -1.184607130107e-8, 1.347873288827e-7,
            -4.47788241748377e-6, 1.54942754358273e-4, -0.00355524254280266, 0.0644912219301603,
        ],
        &[
            7.79850771456444e-15, 6.00464406395001e-14, -1.249779730869e-12, -1.020720636353e-11,
            1.814709816693e-10, 1.766397336977e-9, -4.60355944901e-8, 5.863956443581e-7,
            -2.03797212506691e-5, 6.31405161185185e-4, -0.0130102750145071, 0.210244289044705,
        ],
        &[
            -2.92397030777912e-15, 1.94152129078465e-14, 4.85944766585e-13, -3.217227223463e-12,
            -7.484522135512e-11, 7.19101516047753e-10, 6.88409355245582e-9, -1.44374545515769e-7,
            2.74941013315834e-6, -1.02790452049013e-4, 0.00259924221372643, -0.0435712368303551,
            0.562170709585029,
        ],
        &[
            1.1797612684006e-14, 1.24156229350669e-13, -3.89274162228e-12, -7.755793199043e-12,
            9.492190032313e-10, -4.98680128123353e-9, -1.81502268782664e-7, 2.69463269394888e-6,
            2.5003215442164e-5, -0.00133684303917681, 0.0229121951862538, -0.245653725061323,
            1.89999883453047,
        ],
    ],
    weights: [
        &[
            1.74841995087592e-15, -6.95671892641256e-16, -3.000659497257e-13, 2.021279817961e-13,
            3.8535969354e-11, 1.461418533652e-10, -1.014517563435e-8, 1.132736008979e-7,
            -2.86605475073259e-6, 1.21958354908768e-4, -0.00386293751153466, 0.145298342081522,
        ],
        &[
            -1.11199320525573e-15, 1.85007587796671e-15, 1.220613939709e-13, 1.275068098526e-12,
            -5.341838883262e-11, 6.161037256669e-10, -1.00914787975e-8, 2.907862965346e-7,
            -6.12300038720919e-6, 1.00104454489518e-4, -0.00180677298502757, 0.057800991453663,
        ],
        &[
            -9.49816486853687e-16, 6.67922080354234e-15, 2.606163540537e-15, 1.98379995015e-12,
            -5.400548574357e-11, 6.638043374114e-10, -8.799518866802e-9, 1.791418482685e-7,
            -2.96075397351101e-6, 3.38028206156144e-5, -3.58426847857878e-4, 0.00839213709428516,
        ],
        &[
            1.3382997106018e-17, -3.4484187784414e-16, 4.745009557656e-15, -6.033814209875e-14,
            1.049256040808e-12, -1.70859789556117e-11, 2.15219425727959e-10, -2.52746574206884e-9,
            3.2776171442296e-8, -3.90387662925193e-7, 3.4634020459387e-6, -2.43236345136782e-5,
            3.54846978585226e-4,
        ],
        &[
            2.69412277020887e-20, -4.24837886165685e-19, 6.030500065438e-18, -9.069722758289e-17,
            1.246599177672e-15, -1.56872999797549e-14, 1.87305099552692e-13, -2.09498886675861e-12,
            2.11630022068394e-11, -1.92566242323525e-10, 1.62012436344069e-9, -1.23621614171556e-8,
            7.72165684563049e-8, -3.59858901591047e-7, 2.43682618601e-6,
        ],
    ],
};

/// 20 <= T < 25, centred at 22.5.
pub static BAND_20_25: BandFit = BandFit {
    shift: 22.5,
    roots: [
        &[
            -1.13927848238726e-15, 7.39404133595713e-15, 1.445982921243e-13, -2.676703245252e-12,
            5.823521627177e-12, 2.17264723874381e-10, 3.56242145897468e-9, -3.03763737404491e-7,
            9.46859114120901e-6, -2.30896753853196e-4, 0.00524663913001114,
        ],
        &[
            2.89872355524581e-16, -1.22296292045864e-14, 6.1840650972e-14, 1.64984659123e-12,
            -2.729713905266e-11, 3.70991379065e-11, 2.216486288382e-9, 4.616160236414e-8,
            -3.32380270861364e-6, 9.84635072633776e-5, -0.00230092118015697, 0.0500845183695073,
        ],
        &[
            1.97068646590923e-15, -4.894192706268e-14, 1.136466605916e-13, 7.546203883874e-12,
            -9.635646767455e-11, -8.295965491209e-11, 7.534109114453e-9, 2.699970652707e-7,
            -1.42982334217081e-5, 3.78290946669264e-4, -0.00803133015084373, 0.158689469640791,
        ],
        &[
            1.33642069941389e-14, -1.55850612605745e-13, -7.522712577474e-13, 3.209520801187e-11,
            -2.075594313618e-10, -2.070575894402e-9, 7.323046997451e-9, 1.851491550417e-6,
            -6.37524802411383e-5, 0.00136795464918785, -0.0242051126993146, 0.397847167557815,
        ],
        &[
            -6.07053986130526e-14, 1.04447493138843e-12, -4.286617818951e-13, -2.632066100073e-10,
            4.804518986559e-9, -1.835675889421e-8, -1.068175391334e-6, 3.292234974141e-5,
            -5.94805357558251e-4, 0.00829382168612791, -0.0993122509049447, 1.09857804755042,
        ],
    ],
    weights: [
        &[
            -9.10338640266542e-15, 1.00438927627833e-13, 7.817349237071e-13, -2.547619474232e-11,
            1.479321506529e-10, 1.52314028857627e-9, 9.20072040917242e-9, -2.19427111221848e-6,
            8.65797782880311e-5, -0.00282718629312875, 0.128718310443295,
        ],
        &[
            5.5238092761876e-15, -6.43424400204124e-14, -2.358734508092e-13, 8.261326648131e-12,
            9.229645304956e-11, -5.68108973828949e-9, 1.22477891136278e-7, -2.11919643127927e-6,
            4.23605032368922e-5, -0.00114423444576221, 0.0506607252890186,
        ],
        &[
            3.99457454087556e-15, -5.11826702824182e-14, -4.157593182747e-14, 4.214670817758e-12,
            6.705582751532e-11, -3.36086411698418e-9, 6.07453633298986e-8, -7.40736211041247e-7,
            8.84176371665149e-6, -1.72559275066834e-4, 0.00716639814253567,
        ],
        &[
            -2.14649508112234e-18, -2.45525846412281e-18, 6.126212599772e-16, -8.526651626939e-15,
            4.826636065733e-14, -3.3955416364974e-13, 1.67070784862985e-11, -4.42671979311163e-10,
            6.773680559084e-9, -7.03520999708859e-8, 6.04993294708874e-7, -7.80555094280483e-6,
            2.85954806605017e-4,
        ],
        &[
            -5.63938733073804e-21, 6.92182516324628e-20, -1.586937691507e-18, 3.357639744582e-17,
            -4.810285046442e-16, 5.386312669975e-15, -6.117895297439e-14, 8.441808227634e-13,
            -1.18527596836592e-11, 1.36296870441445e-10, -1.17842611094141e-9, 7.80430641995926e-9,
            -5.9776741740054e-8, 1.65186146094969e-6,
        ],
    ],
};

/// 25 <= T < 40: corrections damped by e^{-T}.
pub static ASYM_25_40: AsymFit = AsymFit {
    roots: [
        &[
            -1.73363958895356e-6, 1.19921331441483e-4, -0.0159437614121125, 1.13467897349442,
            -44.7216460864586, 1062.51216612604, -15207.3917378512, 120662.887111273,
            -407186.366852475,
        ],
        &[
            -1.6010254262171e-5, 0.00110331262112395, -0.150043662589017, 10.5563640866077,
            -410.468817024806, 9626.04416506819, -135888.06983827, 1061075.7703834,
            -3511907.92816119,
        ],
        &[
            -4.48880032128422e-5, 0.00269025112122177, -0.401048115525954, 27.8360021977405,
            -1048.91729356965, 23698.5942687423, -319504.627257548, 2348796.93563358,
            -7163415.68174085,
        ],
        &[
            -6.38526371092582e-5, -0.00229263585792626, -0.0765735935499627, 9.12692349152792,
            -232.077034386717, 281.839578728845, 95952.9683876419, -1776389.56809518,
            10248975.964541,
        ],
        &[
            -3.59049364231569e-5, -0.0225963977930044, 1.12594870794668, -45.6752462103909,
            1058.04526830637, -11600.3199605875, -40729.7627297272, 2222155.28319857,
            -16119645.5032613,
        ],
    ],
    weights: [
        &[
            2.7777834587065e-5, -0.0022283501765589, 0.161077633475573, -8.96743743396132,
            328.062687293374, -7657.22701219557, 110255.055017664, -892528.122219324,
            3106386.27744347,
        ],
        &[
            1.83574464457207e-5, -0.00154837969489927, 0.118520453711586, -6.69649981309161,
            244.789386487321, -5688.32664556359, 81450.7604229357, -655181.056671474,
            2264108.96607237,
        ],
        &[
            -2.4079943580995e-8, 8.12621667601546e-6, -9.04491430884113e-4, 0.0637686375770059,
            -2.96135703135647, 91.514235699633, -1869.71865249111, 24294.5528916947,
            -181852.473229081, 596854.758661427,
        ],
        &[
            -4.6110090613397e-10, 1.43069932644286e-7, -1.6396091543108e-5, 0.00115791154612838,
            -0.0530573476742071, 1.61156533367153, -32.3248143316007, 412.007318109157,
            -3022.60070158372, 9715.75094154768,
        ],
    ],
};

/// 40 <= T < 59: corrections damped by T^3 e^{-T} (roots) and T^6 e^{-T} (weights).
pub static ASYM_40_59: AsymFit = AsymFit {
    roots: [
        &[
            -0.0243758528330205, 2.07301567989771, -64.5964225381113, 714.16008865547,
        ],
        &[
            -0.228861955413636, 19.3190784733691, -599.774730340912, 6618.44165304871,
        ],
        &[
            -0.695053039285586, 57.6874090316016, -1777.0414322552, 19536.6082947811,
        ],
        &[
            -1.58072809087018, 127.050801091948, -3866.8735091428, 42302.482812142,
        ],
        &[
            -3.33963830405396, 251.830424600204, -7577.28527654961, 82196.681659569,
        ],
    ],
    weights: [
        &[2.09539509123135e-5, -6.87646614786982e-4, 0.00668743788585688],
        &[1.34547929260279e-5, -4.19389884772726e-4, 0.00387706687610809],
        &[1.23464092261605e-6, -3.5522456427559e-5, 3.03274662192286e-4],
        &[1.35482430510942e-8, -3.27722199212781e-7, 2.41522703684296e-6],
    ],
};
